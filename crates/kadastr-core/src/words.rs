//! Russian cardinal numerals, used to spell out currency amounts.
//!
//! Decomposes a number into three-digit groups and renders each group
//! with the scale word that follows it. The thousands scale takes
//! feminine agreement (`одна тысяча`, `две тысячи`); all higher scales
//! are masculine.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gender {
    Masculine,
    Feminine,
}

const UNITS_M: [&str; 10] = [
    "", "один", "два", "три", "четыре", "пять", "шесть", "семь", "восемь", "девять",
];
const UNITS_F: [&str; 10] = [
    "", "одна", "две", "три", "четыре", "пять", "шесть", "семь", "восемь", "девять",
];
const TEENS: [&str; 10] = [
    "десять",
    "одиннадцать",
    "двенадцать",
    "тринадцать",
    "четырнадцать",
    "пятнадцать",
    "шестнадцать",
    "семнадцать",
    "восемнадцать",
    "девятнадцать",
];
const TENS: [&str; 10] = [
    "",
    "",
    "двадцать",
    "тридцать",
    "сорок",
    "пятьдесят",
    "шестьдесят",
    "семьдесят",
    "восемьдесят",
    "девяносто",
];
const HUNDREDS: [&str; 10] = [
    "",
    "сто",
    "двести",
    "триста",
    "четыреста",
    "пятьсот",
    "шестьсот",
    "семьсот",
    "восемьсот",
    "девятьсот",
];

/// Scale words as (one, few, many, gender) — enough to cover all of u64.
const SCALES: [(&str, &str, &str, Gender); 6] = [
    ("тысяча", "тысячи", "тысяч", Gender::Feminine),
    ("миллион", "миллиона", "миллионов", Gender::Masculine),
    ("миллиард", "миллиарда", "миллиардов", Gender::Masculine),
    ("триллион", "триллиона", "триллионов", Gender::Masculine),
    ("квадриллион", "квадриллиона", "квадриллионов", Gender::Masculine),
    ("квинтиллион", "квинтиллиона", "квинтиллионов", Gender::Masculine),
];

/// Spell `n` as a Russian cardinal, e.g. `1234` →
/// `одна тысяча двести тридцать четыре`. Total over all of u64.
pub fn spell_cardinal(n: u64) -> String {
    if n == 0 {
        return "ноль".to_string();
    }

    // Three-digit groups, least significant first.
    let mut groups: Vec<u16> = Vec::new();
    let mut rest = n;
    while rest > 0 {
        groups.push((rest % 1000) as u16);
        rest /= 1000;
    }

    let mut parts: Vec<&str> = Vec::new();
    for (i, &group) in groups.iter().enumerate().rev() {
        if group == 0 {
            continue;
        }
        let gender = if i > 0 { SCALES[i - 1].3 } else { Gender::Masculine };
        push_triple(group, gender, &mut parts);
        if i > 0 {
            let (one, few, many, _) = SCALES[i - 1];
            parts.push(plural_form(group, one, few, many));
        }
    }
    parts.join(" ")
}

/// Pick the plural form for `n` of its scale word: 1 → nominative,
/// 2–4 → genitive singular, everything else (including 11–14) →
/// genitive plural.
fn plural_form<'a>(n: u16, one: &'a str, few: &'a str, many: &'a str) -> &'a str {
    let tail = n % 100;
    if (11..=14).contains(&tail) {
        return many;
    }
    match tail % 10 {
        1 => one,
        2..=4 => few,
        _ => many,
    }
}

/// Spell one three-digit group (1..=999) into `parts`.
fn push_triple(n: u16, gender: Gender, parts: &mut Vec<&str>) {
    let hundreds = (n / 100) as usize;
    let tail = n % 100;

    if hundreds > 0 {
        parts.push(HUNDREDS[hundreds]);
    }
    if (10..20).contains(&tail) {
        parts.push(TEENS[(tail - 10) as usize]);
        return;
    }
    let tens = (tail / 10) as usize;
    let units = (tail % 10) as usize;
    if tens > 0 {
        parts.push(TENS[tens]);
    }
    if units > 0 {
        parts.push(match gender {
            Gender::Masculine => UNITS_M[units],
            Gender::Feminine => UNITS_F[units],
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero() {
        assert_eq!(spell_cardinal(0), "ноль");
    }

    #[test]
    fn units_and_teens() {
        assert_eq!(spell_cardinal(1), "один");
        assert_eq!(spell_cardinal(7), "семь");
        assert_eq!(spell_cardinal(10), "десять");
        assert_eq!(spell_cardinal(11), "одиннадцать");
        assert_eq!(spell_cardinal(19), "девятнадцать");
    }

    #[test]
    fn tens_and_hundreds() {
        assert_eq!(spell_cardinal(20), "двадцать");
        assert_eq!(spell_cardinal(21), "двадцать один");
        assert_eq!(spell_cardinal(56), "пятьдесят шесть");
        assert_eq!(spell_cardinal(100), "сто");
        assert_eq!(spell_cardinal(999), "девятьсот девяносто девять");
    }

    #[test]
    fn thousands_take_feminine_agreement() {
        assert_eq!(spell_cardinal(1000), "одна тысяча");
        assert_eq!(spell_cardinal(2000), "две тысячи");
        assert_eq!(spell_cardinal(5000), "пять тысяч");
        assert_eq!(spell_cardinal(21_000), "двадцать одна тысяча");
        assert_eq!(
            spell_cardinal(1234),
            "одна тысяча двести тридцать четыре"
        );
    }

    #[test]
    fn eleven_to_fourteen_use_genitive_plural() {
        assert_eq!(spell_cardinal(11_000), "одиннадцать тысяч");
        assert_eq!(spell_cardinal(12_000_000), "двенадцать миллионов");
        assert_eq!(spell_cardinal(114_000), "сто четырнадцать тысяч");
    }

    #[test]
    fn millions_are_masculine() {
        assert_eq!(spell_cardinal(1_000_000), "один миллион");
        assert_eq!(spell_cardinal(2_000_000), "два миллиона");
        assert_eq!(spell_cardinal(5_000_000), "пять миллионов");
    }

    #[test]
    fn skips_zero_groups() {
        assert_eq!(spell_cardinal(1_000_001), "один миллион один");
        assert_eq!(
            spell_cardinal(2_000_300),
            "два миллиона триста"
        );
    }

    #[test]
    fn full_u64_range_has_scale_words() {
        // 18 446 744 073 709 551 615
        let spelled = spell_cardinal(u64::MAX);
        assert!(spelled.starts_with("восемнадцать квинтиллионов"));
        assert!(spelled.ends_with("шестьсот пятнадцать"));
    }
}
