#![allow(missing_docs)]

use std::io::{self, Cursor, Read, Write};

use unistream::{
    ByteSwapOptions, Error, U16ByteSwap, U16Swap, U16Utf8, U32Stream, U32Utf8, UnitReader,
    UnitWriter, Utf8Utf16,
    io::{ReadSource, WriteSink},
};

#[test]
fn utf8_file_to_utf16le_bytes() {
    let text = "na\u{EF}ve \u{1D11E}";
    let mut reader = U16Utf8::with_source(ReadSource::<_, u8>::new(Cursor::new(text.as_bytes())));
    let mut sink = WriteSink::<_, u16>::new(Vec::new());
    {
        let mut w = U16ByteSwap::with_sink_and_options(
            &mut sink,
            ByteSwapOptions {
                swap: U16Swap::Le,
                ..Default::default()
            },
        );
        while let Some(u) = reader.read_unit().unwrap() {
            w.write_unit(u).unwrap();
        }
    }
    let expected: Vec<u8> = text.encode_utf16().flat_map(u16::to_le_bytes).collect();
    assert_eq!(sink.into_inner(), expected);
}

#[test]
fn odd_byte_count_is_not_utf16() {
    let bytes: &[u8] = &[0x41, 0x00, 0x42];
    let mut r = Utf8Utf16::with_source(ReadSource::<_, u16>::new(bytes));
    let results: Vec<Result<u8, Error>> = r.units().collect();
    assert!(results.len() >= 2);
    assert_eq!(results.last(), Some(&Err(Error::NotUtf16)));
}

struct Interrupting<'a> {
    data: &'a [u8],
    interrupt_next: bool,
}

impl Read for Interrupting<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.interrupt_next = !self.interrupt_next;
        if self.interrupt_next {
            return Err(io::ErrorKind::Interrupted.into());
        }
        let n = buf.len().min(1).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

#[test]
fn interrupted_reads_are_retried() {
    let text = "\u{20AC}1";
    let source = ReadSource::<_, u8>::new(Interrupting {
        data: text.as_bytes(),
        interrupt_next: false,
    });
    let mut r = U32Utf8::with_source(source);
    assert_eq!(r.read_unit(), Ok(Some(0x20AC)));
    assert_eq!(r.read_unit(), Ok(Some(0x31)));
    assert_eq!(r.read_unit(), Ok(None));
}

struct Broken;

impl Read for Broken {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("disk on fire"))
    }
}

impl Write for Broken {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("disk on fire"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::other("disk on fire"))
    }
}

#[test]
fn io_errors_become_faults() {
    let mut r = U32Utf8::with_source(ReadSource::<_, u8>::new(Broken));
    assert_eq!(r.read_unit(), Err(Error::SourceFault));

    let mut w = U32Utf8::with_sink(WriteSink::<_, u8>::new(Broken));
    assert_eq!(w.write_unit(0x41), Err(Error::SinkFault));
    assert_eq!(w.sink_mut().flush(), Err(Error::SinkFault));
}

#[test]
fn host_order_units_through_write_sink() {
    let mut sink = WriteSink::<_, u32>::new(Vec::new());
    let mut w = U32Stream::with_sink(&mut sink);
    w.write_unit(0xE9).unwrap();
    drop(w);
    sink.flush().unwrap();
    assert_eq!(sink.get_ref(), &0xE9u32.to_ne_bytes());
}
