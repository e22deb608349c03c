// Each byte maps to a bit set of RFC 3986 classes. `%` is in no class;
// percent-encoded triplets are handled by the scanner.
pub const UNRESERVED: u8 = 1 << 0;
pub const SUB_DELIM: u8 = 1 << 1;
pub const COLON: u8 = 1 << 2;
pub const AT: u8 = 1 << 3;
pub const SLASH: u8 = 1 << 4;
pub const QUESTION: u8 = 1 << 5;
/// ALPHA / DIGIT / "+" / "-" / "."
pub const SCHEME: u8 = 1 << 6;

pub const USERINFO: u8 = UNRESERVED | SUB_DELIM | COLON;
pub const REG_NAME: u8 = UNRESERVED | SUB_DELIM;
pub const PCHAR: u8 = UNRESERVED | SUB_DELIM | COLON | AT;
pub const PATH: u8 = PCHAR | SLASH;
/// Query and fragment share one set
pub const QUERY: u8 = PCHAR | SLASH | QUESTION;

const CHAR_CLASS_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];

    let mut i = b'a';
    while i <= b'z' {
        table[i as usize] = UNRESERVED | SCHEME;
        i += 1;
    }
    let mut i = b'A';
    while i <= b'Z' {
        table[i as usize] = UNRESERVED | SCHEME;
        i += 1;
    }
    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] = UNRESERVED | SCHEME;
        i += 1;
    }
    table[b'-' as usize] = UNRESERVED | SCHEME;
    table[b'.' as usize] = UNRESERVED | SCHEME;
    table[b'_' as usize] = UNRESERVED;
    table[b'~' as usize] = UNRESERVED;

    table[b'!' as usize] = SUB_DELIM;
    table[b'$' as usize] = SUB_DELIM;
    table[b'&' as usize] = SUB_DELIM;
    table[b'\'' as usize] = SUB_DELIM;
    table[b'(' as usize] = SUB_DELIM;
    table[b')' as usize] = SUB_DELIM;
    table[b'*' as usize] = SUB_DELIM;
    table[b'+' as usize] = SUB_DELIM | SCHEME;
    table[b',' as usize] = SUB_DELIM;
    table[b';' as usize] = SUB_DELIM;
    table[b'=' as usize] = SUB_DELIM;

    table[b':' as usize] = COLON;
    table[b'@' as usize] = AT;
    table[b'/' as usize] = SLASH;
    table[b'?' as usize] = QUESTION;

    table
};

/// Check whether a byte belongs to any class in `mask`
pub fn is_in(b: u8, mask: u8) -> bool {
    CHAR_CLASS_TABLE[b as usize] & mask != 0
}
