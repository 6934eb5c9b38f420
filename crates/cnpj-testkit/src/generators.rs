//! Proptest generators for property-based testing.

use proptest::prelude::*;

use cnpj_core::{BaseDigits, Cnpj, BASE_LEN};

/// Generate a random 12-digit base string.
pub fn base_string() -> impl Strategy<Value = String> {
    "[0-9]{12}".prop_map(String::from)
}

/// Generate random base digits.
pub fn base_digits() -> impl Strategy<Value = BaseDigits> {
    any::<[u8; BASE_LEN]>().prop_map(BaseDigits::from_values)
}

/// Generate a valid CNPJ.
pub fn valid_cnpj() -> impl Strategy<Value = Cnpj> {
    base_digits().prop_map(|b| b.check_digits())
}

/// Generate a non-empty digit string whose length is anything but 14.
pub fn wrong_length_candidate() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{1,13}".prop_map(String::from),
        "[0-9]{15,40}".prop_map(String::from),
    ]
}

/// Generate a 12-character base containing at least one non-digit.
pub fn non_digit_base() -> impl Strategy<Value = String> {
    ("[0-9]{11}", 0usize..BASE_LEN, "[a-zA-Z ./-]").prop_map(|(digits, pos, bad)| {
        let mut s = digits;
        s.insert_str(pos, &bad);
        s
    })
}

/// Generate a valid CNPJ with exactly one check digit altered.
pub fn tampered_cnpj() -> impl Strategy<Value = String> {
    (valid_cnpj(), 12usize..14, 1u8..10).prop_map(|(cnpj, pos, bump)| {
        let mut bytes = cnpj.into_string().into_bytes();
        bytes[pos] = b'0' + (bytes[pos] - b'0' + bump) % 10;
        bytes.into_iter().map(char::from).collect()
    })
}
