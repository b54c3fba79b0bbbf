use std::{fs::File, io::Read};

use llc_pdu::{Cursor, PktBuf};
use llc_pdu::Buf;

/// Length of the 802.3 header: destination, source and length field.
pub const DOT3_HEADER_LEN: usize = 14;

pub fn file_to_packet(fname: &str) -> Vec<u8> {
    // The test is executed under the crate root directory.
    let mut program_path = std::env::current_dir().unwrap();
    program_path.push("tests");
    program_path.push("packet_examples");
    program_path.push(fname);

    let mut file = File::open(program_path).unwrap();
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    let content = content.trim();

    (0..content.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&content[i..i + 2], 16).unwrap())
        .collect()
}

/// Strip the 802.3 header and the trailing padding, leaving a cursor over
/// the LLC pdu announced by the length field.
pub fn dot3_payload(frame: &[u8]) -> Cursor<'_> {
    let llc_len = u16::from_be_bytes([frame[12], frame[13]]) as usize;
    let mut cursor = Cursor::new(frame);
    cursor.advance(DOT3_HEADER_LEN);
    cursor.trim_off(cursor.remaining() - llc_len);
    cursor
}
