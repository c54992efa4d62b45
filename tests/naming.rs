use profiles::{DEFAULT_PROFILE_NAME, sanitize_profile_name};

#[test]
fn blank_names_fall_back_to_default() {
    for blank in ["", " ", "\t", "\n \r\n", "   \t  "] {
        assert_eq!(sanitize_profile_name(blank), "Default", "input {blank:?}");
    }
    assert_eq!(sanitize_profile_name(None), DEFAULT_PROFILE_NAME);
}

#[test]
fn trims_surrounding_whitespace_only() {
    assert_eq!(sanitize_profile_name(" My Profile "), "My Profile");
    assert_eq!(sanitize_profile_name("\tWork\n"), "Work");
    assert_eq!(sanitize_profile_name("a  b"), "a  b");
    assert_eq!(sanitize_profile_name(Some(" x")), "x");
}

#[test]
fn preserves_case() {
    assert_eq!(sanitize_profile_name("Gaming"), "Gaming");
    assert_ne!(sanitize_profile_name("A"), sanitize_profile_name("a"));
}

#[test]
fn is_idempotent() {
    for input in ["", "  ", " My Profile ", "Work", "\tx y\t", "Default"] {
        let once = sanitize_profile_name(input);
        assert_eq!(sanitize_profile_name(once.as_str()), once, "input {input:?}");
    }
}
