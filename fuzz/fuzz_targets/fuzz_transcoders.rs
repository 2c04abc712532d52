#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use unistream::{
    ByteSwapOptions, Error, HostOrder, U16ByteSwap, U16Latin1, U16Stream, U16Swap, U16Utf8,
    U16Utf32, U32ByteSwap, U32Latin1, U32Stream, U32Swap, U32Utf8, U32Utf16, UnitWriter,
    Utf8Latin1, Utf8Stream, Utf8Utf16, Utf8Utf32, io::SliceSource, validity::is_valid_scalar,
};

#[derive(Debug, Arbitrary)]
struct Input {
    bytes: Vec<u8>,
    units: Vec<u16>,
    words: Vec<u32>,
    swap32: U32Swap,
    swap16: U16Swap,
    host: HostOrder,
}

macro_rules! drain {
    ($t:ident, $data:expr) => {{
        let r: Result<Vec<_>, Error> = $t::with_source(SliceSource::new($data)).units().collect();
        r
    }};
}

macro_rules! feed {
    ($t:ident, $data:expr) => {{
        let mut out = Vec::new();
        let r = {
            let mut w = $t::with_sink(&mut out);
            $data
                .iter()
                .try_for_each(|&u| w.write_unit(u))
                .and_then(|()| w.write_end())
        };
        r.map(|()| out)
    }};
}

fuzz_target!(|input: Input| {
    let Input {
        bytes,
        units,
        words,
        swap32,
        swap16,
        host,
    } = input;

    // Reading: nothing may panic, and clean decodes re-encode to the input.
    let from_utf8 = drain!(U32Utf8, &bytes);
    if let Ok(scalars) = &from_utf8 {
        assert_eq!(feed!(U32Utf8, scalars).as_ref(), Ok(&bytes));
    }
    if let Ok(s) = core::str::from_utf8(&bytes) {
        if s.chars().all(|c| is_valid_scalar(u32::from(c))) {
            assert_eq!(from_utf8, Ok(s.chars().map(u32::from).collect()));
        }
    }
    let from_utf16 = drain!(U32Utf16, &units);
    if let Ok(scalars) = &from_utf16 {
        assert_eq!(feed!(U32Utf16, scalars).as_ref(), Ok(&units));
    }
    let _ = drain!(U32Stream, &words);
    let _ = drain!(U32Latin1, &bytes);
    let _ = drain!(U16Utf32, &words);
    let _ = drain!(U16Stream, &units);
    let _ = drain!(U16Utf8, &bytes);
    let _ = drain!(U16Latin1, &bytes);
    let _ = drain!(Utf8Utf32, &words);
    let _ = drain!(Utf8Utf16, &units);
    let _ = drain!(Utf8Stream, &bytes);
    let _ = drain!(Utf8Latin1, &bytes);

    // Writing one unit at a time agrees with reading.
    let written = feed!(Utf8Utf32, &bytes);
    assert_eq!(written.is_ok(), from_utf8.is_ok());
    let _ = feed!(U16Utf8, &units);
    let _ = feed!(Utf8Latin1, &bytes);
    let _ = feed!(U16Latin1, &units);
    let _ = feed!(U32Latin1, &words);

    // Byte swapping under any requested state.
    let options32 = ByteSwapOptions { swap: swap32, host };
    let _: Result<Vec<u32>, Error> =
        U32ByteSwap::with_source_and_options(SliceSource::new(&words), options32)
            .units()
            .collect();
    let options16 = ByteSwapOptions { swap: swap16, host };
    let mut raw: Vec<u16> = Vec::new();
    {
        let mut w = U16ByteSwap::with_sink_and_options(&mut raw, options16);
        for &u in &units {
            w.write_unit(u).unwrap();
        }
    }
    let back: Result<Vec<u16>, Error> =
        U16ByteSwap::with_source_and_options(SliceSource::new(&raw), options16)
            .units()
            .collect();
    if swap16 == U16Swap::FirstUnit && units.first().is_some_and(|&u| u != 0xFEFF) {
        let mut marked = vec![0xFEFF];
        marked.extend_from_slice(&units);
        assert_eq!(back, Ok(marked));
    } else {
        assert_eq!(back, Ok(units));
    }
});
