/// Domain words accepted regardless of the dictionary. Sorted, lowercase.
const JARGON: &[&str] = &[
    "addr",
    "aes",
    "arg",
    "ciphertext",
    "cmd",
    "del",
    "desc",
    "dev",
    "dst",
    "eax",
    "ebx",
    "ecx",
    "edx",
    "endianness",
    "fpga",
    "gettime",
    "grep",
    "hmac",
    "init",
    "ip",
    "len",
    "linux",
    "malloc",
    "mem",
    "msg",
    "nb",
    "pci",
    "pe",
    "pid",
    "plaintext",
    "prev",
    "proc",
    "ptr",
    "ptrace",
    "rb",
    "realloc",
    "ret",
    "shl",
    "shr",
    "sizeof",
    "snprintf",
    "spi",
    "src",
    "str",
    "struct",
    "sudo",
    "tmp",
    "tsearch",
    "wunused",
    "xor",
    "xtea",
];

/// `word` must already be lowercase.
#[must_use]
pub fn is_jargon(word: &str) -> bool {
    JARGON.binary_search(&word).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jargon_list_is_sorted() {
        assert!(JARGON.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn known_jargon_is_accepted() {
        assert!(is_jargon("malloc"));
        assert!(is_jargon("xtea"));
        assert!(!is_jargon("mallocx"));
    }
}
