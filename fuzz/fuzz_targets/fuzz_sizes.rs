#![no_main]

use bumparena::ArenaHandler;
use libfuzzer_sys::fuzz_target;

// Fuzz target that exercises size boundaries and the small-remainder
// policy. Interprets input as a series of (size, flags) pairs: request,
// write the full extent, free, then request a smaller slice of the freed
// range so the first-fit tail handling runs at arbitrary sizes.

fuzz_target!(|data: &[u8]| {
    let mut handler = ArenaHandler::new();

    let mut i = 0;
    while i + 4 <= data.len() {
        let raw_size = u16::from_le_bytes([data[i], data[i + 1]]) as usize;
        let flags = data[i + 2];
        let align = 1u8 << (data[i + 3] & 0x07);
        i += 4;

        let size = raw_size.max(1);
        let use_default = flags & 1 != 0;

        let p = handler.request_memory(size, align, use_default);
        assert!(!p.is_null(), "request({size}, {align}) failed");
        assert_eq!(
            p as usize % align as usize,
            0,
            "request({size}, {align}) returned unaligned pointer {p:p}"
        );

        // Write the full extent -- this must not touch any other range.
        unsafe {
            std::ptr::write_bytes(p, 0xBB, size);
        }

        unsafe {
            handler.free_memory(p, size).expect("free must succeed");
        }

        // Re-request a prefix of the freed range; tails land on either side
        // of the minimum-block threshold depending on the fuzzed size.
        let again = (size / 2).max(1);
        let q = handler.request_memory(again, 1, use_default);
        assert!(!q.is_null());
        unsafe {
            std::ptr::write_bytes(q, 0xCC, again);
            handler.free_memory(q, again).expect("free must succeed");
        }
    }
});
