#![no_main]

use bumparena::ArenaHandler;
use libfuzzer_sys::fuzz_target;

/// Fuzz target that interprets a byte slice as a sequence of handler
/// operations.
///
/// Each operation is encoded as:
///   byte 0: opcode (even = request, odd = free)
///   byte 1-2: size (little-endian u16, clamped to >= 1)
///   byte 3: low 3 bits pick the alignment shift, rest picks a slot
///
/// We track up to 64 live intervals; the handler is dropped at the end with
/// whatever is still outstanding.
const MAX_SLOTS: usize = 64;

fuzz_target!(|data: &[u8]| {
    let mut handler = ArenaHandler::new();
    let mut slots: [(usize, usize); MAX_SLOTS] = [(0, 0); MAX_SLOTS];

    let mut i = 0;
    while i + 4 <= data.len() {
        let opcode = data[i];
        let size = (u16::from_le_bytes([data[i + 1], data[i + 2]]) as usize).max(1);
        let align = 1u8 << (data[i + 3] & 0x07);
        let slot = (data[i + 3] >> 3) as usize % MAX_SLOTS;
        i += 4;

        if opcode & 1 == 0 {
            // request into the slot, freeing whatever it held
            let (old_ptr, old_size) = slots[slot];
            if old_ptr != 0 {
                unsafe {
                    handler
                        .free_memory(old_ptr as *mut u8, old_size)
                        .expect("free of a live interval must not fail");
                }
            }
            let p = handler.request_memory(size, align, true);
            assert!(!p.is_null(), "request({size}, {align}) failed");
            assert_eq!(p as usize % align as usize, 0, "misaligned result");

            // The range must be writable end to end.
            unsafe {
                std::ptr::write_bytes(p, 0xA7, size);
                assert_eq!(*p, 0xA7);
                assert_eq!(*p.add(size - 1), 0xA7);
            }
            slots[slot] = (p as usize, size);
        } else {
            // free the slot
            let (ptr, size) = slots[slot];
            if ptr != 0 {
                unsafe {
                    handler
                        .free_memory(ptr as *mut u8, size)
                        .expect("free of a live interval must not fail");
                }
                slots[slot] = (0, 0);
            }
        }
    }

    // Teardown releases the arenas with live intervals still outstanding.
    drop(handler);
});
