#![allow(missing_docs)]

use core::fmt::Write;

use unistream::{
    ByteSwapOptions, Error, Status, U16ByteSwap, U16Swap, U32ByteSwap, U32Swap, U32Utf8, UnitReader,
    UnitWriter, Utf8Utf32, U16Utf32,
    io::SliceSource,
};

fn hex8(units: &[u8]) -> String {
    units.iter().map(|b| format!("{b:02X}")).collect::<Vec<_>>().join(" ")
}

fn render_encodings(text: &str) -> String {
    let scalars: Vec<u32> = text.chars().map(u32::from).collect();
    let utf8: Result<Vec<u8>, Error> = Utf8Utf32::with_source(SliceSource::new(&scalars)).units().collect();
    let utf16: Result<Vec<u16>, Error> = U16Utf32::with_source(SliceSource::new(&scalars)).units().collect();
    let utf16 = utf16.unwrap();
    let mut out = String::new();
    writeln!(out, "utf8: {}", hex8(&utf8.unwrap())).unwrap();
    writeln!(
        out,
        "utf16: {}",
        utf16.iter().map(|u| format!("{u:04X}")).collect::<Vec<_>>().join(" ")
    )
    .unwrap();
    writeln!(
        out,
        "utf32: {}",
        scalars.iter().map(|v| format!("{v:08X}")).collect::<Vec<_>>().join(" ")
    )
    .unwrap();
    out
}

fn render_reads(cases: &[&[u8]]) -> String {
    let mut out = String::new();
    for bytes in cases {
        let mut r = U32Utf8::with_source(SliceSource::new(bytes));
        let mut read = Vec::new();
        let tail = loop {
            match r.read_unit() {
                Ok(Some(v)) => read.push(format!("{v:08X}")),
                Ok(None) => break "end".to_string(),
                Err(e) => break format!("{e:?}"),
            }
        };
        writeln!(out, "{} => [{}] {tail}", hex8(bytes), read.join(" ")).unwrap();
    }
    out
}

#[test]
fn snapshot_encodings() {
    insta::assert_snapshot!(render_encodings("A\u{E9}\u{20AC}\u{1D11E}"), @r"
    utf8: 41 C3 A9 E2 82 AC F0 9D 84 9E
    utf16: 0041 00E9 20AC D834 DD1E
    utf32: 00000041 000000E9 000020AC 0001D11E
    ");
}

#[test]
fn snapshot_malformed_utf8() {
    let cases: [&[u8]; 6] = [
        &[0x41, 0xC0, 0x80],
        &[0xE2, 0x82],
        &[0x80],
        &[0xF8, 0x80],
        &[0xEF, 0xBF, 0xBE],
        &[0x61, 0xF4, 0x8F, 0xBF, 0xBD],
    ];
    insta::assert_snapshot!(render_reads(&cases), @r"
    41 C0 80 => [00000041] NotUtf8
    E2 82 => [] NoFollow
    80 => [] NoLead
    F8 80 => [] NotUtf8
    EF BF BE => [] NotUnicode
    61 F4 8F BF BD => [00000061 0010FFFD] end
    ");
}

#[test]
fn snapshot_requested_byte_orders() {
    let mut out = String::new();
    for swap in [U16Swap::Le, U16Swap::Be] {
        let mut raw: Vec<u16> = Vec::new();
        {
            let mut w = U16ByteSwap::with_sink_and_options(&mut raw, ByteSwapOptions { swap, ..Default::default() });
            for u in "Hi".encode_utf16() {
                w.write_unit(u).unwrap();
            }
        }
        let bytes: Vec<u8> = raw.iter().flat_map(|u| u.to_ne_bytes()).collect();
        writeln!(out, "u16 {swap:?}: {}", hex8(&bytes)).unwrap();
    }
    for swap in [U32Swap::Le, U32Swap::Be] {
        let mut raw: Vec<u32> = Vec::new();
        {
            let mut w = U32ByteSwap::with_sink_and_options(&mut raw, ByteSwapOptions { swap, ..Default::default() });
            w.write_unit(0x1_D11E).unwrap();
        }
        let bytes: Vec<u8> = raw.iter().flat_map(|u| u.to_ne_bytes()).collect();
        writeln!(out, "u32 {swap:?}: {}", hex8(&bytes)).unwrap();
    }
    insta::assert_snapshot!(out, @r"
    u16 Le: 48 00 69 00
    u16 Be: 00 48 00 69
    u32 Le: 1E D1 01 00
    u32 Be: 00 01 D1 1E
    ");
}

#[test]
fn snapshot_status_codes() {
    let mut out = String::new();
    for code in 2..=13 {
        let Some(Status::Failed(e)) = Status::from_code(code) else {
            panic!("no error for code {code}");
        };
        writeln!(out, "{code:02} {e:?}: {e}").unwrap();
    }
    insta::assert_snapshot!(out, @r"
    02 NoSource: no source is bound
    03 NoSink: no sink is bound
    04 SourceFault: the source failed
    05 SinkFault: the sink failed
    06 BadInput: malformed external input
    07 NoLead: continuation unit without a lead unit
    08 NoFollow: lead unit without its continuation
    09 NotUnicode: not a Unicode scalar value
    10 NotUtf8: not UTF-8
    11 NotUtf16: not UTF-16
    12 NotIso8859_1: not representable in ISO-8859-1
    13 NoByteOrderMark: missing byte-order mark
    ");
}
