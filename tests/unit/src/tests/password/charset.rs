use passforge_password::charset::{CharacterClass, AMBIGUOUS, SIMILAR};

#[test]
fn charset_base_alphabets() {
    assert_eq!("23456789", CharacterClass::Digits.alphabet());
    // Letter alphabets are pre-curated to drop I, O, l and o.
    assert!(!CharacterClass::Upper.alphabet().contains('I'));
    assert!(!CharacterClass::Upper.alphabet().contains('O'));
    assert!(!CharacterClass::Lower.alphabet().contains('l'));
    assert!(!CharacterClass::Lower.alphabet().contains('o'));
}

#[test]
fn charset_filter_similar() {
    let upper: String =
        CharacterClass::Upper.filtered(true, false).iter().collect();
    assert_eq!("ABCDEFGHJKMNPQRSTUVWXYZ", upper);

    let lower: String =
        CharacterClass::Lower.filtered(true, false).iter().collect();
    assert_eq!("abcdefghjkmnpqrstuvwxyz", lower);

    for c in SIMILAR.chars() {
        assert!(!upper.contains(c));
        assert!(!lower.contains(c));
    }
}

#[test]
fn charset_filter_ambiguous() {
    let symbols: String = CharacterClass::Symbols
        .filtered(false, true)
        .iter()
        .collect();
    assert_eq!("!@#$%^&*_+-=|?", symbols);
    for c in AMBIGUOUS.chars() {
        assert!(!symbols.contains(c));
    }
}

#[test]
fn charset_filter_order_preserved() {
    for class in [
        CharacterClass::Digits,
        CharacterClass::Symbols,
        CharacterClass::Upper,
        CharacterClass::Lower,
    ] {
        let filtered = class.filtered(true, true);
        let alphabet: Vec<char> = class.alphabet().chars().collect();
        let mut cursor = alphabet.iter();
        for c in &filtered {
            assert!(cursor.any(|a| a == c), "order changed for {}", class);
        }
    }
}

#[test]
fn charset_filter_never_empty() {
    // The built in alphabets always survive both exclusions.
    for class in [
        CharacterClass::Digits,
        CharacterClass::Symbols,
        CharacterClass::Upper,
        CharacterClass::Lower,
    ] {
        assert!(!class.filtered(true, true).is_empty());
    }
}
