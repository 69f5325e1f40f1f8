//! Static ISO 639-1 → ISO 639-2/B code table.
//!
//! The table is one sequence of pairs sorted by the two-letter code, so the
//! alignment between source and target codes cannot drift. Sortedness and code
//! widths are checked at compile time; a bad edit to the data fails the build.
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

use serde::Serialize;

/// One ISO 639-1 code and its ISO 639-2/B (bibliographic) equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CodeEntry {
    /// Two-letter ISO 639-1 code, e.g. `"de"`.
    pub alpha2: &'static str,
    /// Three-letter ISO 639-2/B code, e.g. `"ger"`.
    pub alpha3: &'static str,
}

impl CodeEntry {
    pub const fn new(alpha2: &'static str, alpha3: &'static str) -> Self {
        Self { alpha2, alpha3 }
    }
}

/// Every known code pair, strictly ascending by `alpha2` (byte order).
pub static CODE_TABLE: &[CodeEntry] = &ENTRIES;

const _: () = assert!(is_well_formed(&ENTRIES), "malformed ISO 639 code table");

/// Number of entries in [`CODE_TABLE`].
pub const fn len() -> usize {
    ENTRIES.len()
}

/// Iterates the table in `alpha2` order.
pub fn entries() -> impl ExactSizeIterator<Item = &'static CodeEntry> {
    CODE_TABLE.iter()
}

/// Returns `true` if every code has the expected width and the two-letter codes
/// are strictly ascending.
pub const fn is_well_formed(table: &[CodeEntry]) -> bool {
    let mut i = 0;
    while i < table.len() {
        if table[i].alpha2.len() != 2 || table[i].alpha3.len() != 3 {
            return false;
        }
        i += 1;
    }
    is_strictly_sorted(table)
}

/// Returns `true` if `alpha2` is strictly ascending under byte comparison,
/// which also rules out duplicates.
pub const fn is_strictly_sorted(table: &[CodeEntry]) -> bool {
    let mut i = 1;
    while i < table.len() {
        if !bytes_lt(table[i - 1].alpha2.as_bytes(), table[i].alpha2.as_bytes()) {
            return false;
        }
        i += 1;
    }
    true
}

// `Ord` for slices is not usable in const context.
const fn bytes_lt(lhs: &[u8], rhs: &[u8]) -> bool {
    let mut i = 0;
    while i < lhs.len() && i < rhs.len() {
        if lhs[i] != rhs[i] {
            return lhs[i] < rhs[i];
        }
        i += 1;
    }
    lhs.len() < rhs.len()
}

const ENTRIES: [CodeEntry; 184] = [
    CodeEntry::new("aa", "aar"),
    CodeEntry::new("ab", "abk"),
    CodeEntry::new("ae", "ave"),
    CodeEntry::new("af", "afr"),
    CodeEntry::new("ak", "aka"),
    CodeEntry::new("am", "amh"),
    CodeEntry::new("an", "arg"),
    CodeEntry::new("ar", "ara"),
    CodeEntry::new("as", "asm"),
    CodeEntry::new("av", "ava"),
    CodeEntry::new("ay", "aym"),
    CodeEntry::new("az", "aze"),
    CodeEntry::new("ba", "bak"),
    CodeEntry::new("be", "bel"),
    CodeEntry::new("bg", "bul"),
    CodeEntry::new("bh", "bih"),
    CodeEntry::new("bi", "bis"),
    CodeEntry::new("bm", "bam"),
    CodeEntry::new("bn", "ben"),
    CodeEntry::new("bo", "tib"),
    CodeEntry::new("br", "bre"),
    CodeEntry::new("bs", "bos"),
    CodeEntry::new("ca", "cat"),
    CodeEntry::new("ce", "che"),
    CodeEntry::new("ch", "cha"),
    CodeEntry::new("co", "cos"),
    CodeEntry::new("cr", "cre"),
    CodeEntry::new("cs", "cze"),
    CodeEntry::new("cu", "chu"),
    CodeEntry::new("cv", "chv"),
    CodeEntry::new("cy", "wel"),
    CodeEntry::new("da", "dan"),
    CodeEntry::new("de", "ger"),
    CodeEntry::new("dv", "div"),
    CodeEntry::new("dz", "dzo"),
    CodeEntry::new("ee", "ewe"),
    CodeEntry::new("el", "gre"),
    CodeEntry::new("en", "eng"),
    CodeEntry::new("eo", "epo"),
    CodeEntry::new("es", "spa"),
    CodeEntry::new("et", "est"),
    CodeEntry::new("eu", "baq"),
    CodeEntry::new("fa", "per"),
    CodeEntry::new("ff", "ful"),
    CodeEntry::new("fi", "fin"),
    CodeEntry::new("fj", "fij"),
    CodeEntry::new("fo", "fao"),
    CodeEntry::new("fr", "fre"),
    CodeEntry::new("fy", "fry"),
    CodeEntry::new("ga", "gle"),
    CodeEntry::new("gd", "gla"),
    CodeEntry::new("gl", "glg"),
    CodeEntry::new("gn", "grn"),
    CodeEntry::new("gu", "guj"),
    CodeEntry::new("gv", "glv"),
    CodeEntry::new("ha", "hau"),
    CodeEntry::new("he", "heb"),
    CodeEntry::new("hi", "hin"),
    CodeEntry::new("ho", "hmo"),
    CodeEntry::new("hr", "hrv"),
    CodeEntry::new("ht", "hat"),
    CodeEntry::new("hu", "hun"),
    CodeEntry::new("hy", "arm"),
    CodeEntry::new("hz", "her"),
    CodeEntry::new("ia", "ina"),
    CodeEntry::new("id", "ind"),
    CodeEntry::new("ie", "ile"),
    CodeEntry::new("ig", "ibo"),
    CodeEntry::new("ii", "iii"),
    CodeEntry::new("ik", "ipk"),
    CodeEntry::new("io", "ido"),
    CodeEntry::new("is", "ice"),
    CodeEntry::new("it", "ita"),
    CodeEntry::new("iu", "iku"),
    CodeEntry::new("ja", "jpn"),
    CodeEntry::new("jv", "jav"),
    CodeEntry::new("ka", "geo"),
    CodeEntry::new("kg", "kon"),
    CodeEntry::new("ki", "kik"),
    CodeEntry::new("kj", "kua"),
    CodeEntry::new("kk", "kaz"),
    CodeEntry::new("kl", "kal"),
    CodeEntry::new("km", "khm"),
    CodeEntry::new("kn", "kan"),
    CodeEntry::new("ko", "kor"),
    CodeEntry::new("kr", "kau"),
    CodeEntry::new("ks", "kas"),
    CodeEntry::new("ku", "kur"),
    CodeEntry::new("kv", "kom"),
    CodeEntry::new("kw", "cor"),
    CodeEntry::new("ky", "kir"),
    CodeEntry::new("la", "lat"),
    CodeEntry::new("lb", "ltz"),
    CodeEntry::new("lg", "lug"),
    CodeEntry::new("li", "lim"),
    CodeEntry::new("ln", "lin"),
    CodeEntry::new("lo", "lao"),
    CodeEntry::new("lt", "lit"),
    CodeEntry::new("lu", "lub"),
    CodeEntry::new("lv", "lav"),
    CodeEntry::new("mg", "mlg"),
    CodeEntry::new("mh", "mah"),
    CodeEntry::new("mi", "mao"),
    CodeEntry::new("mk", "mac"),
    CodeEntry::new("ml", "mal"),
    CodeEntry::new("mn", "mon"),
    CodeEntry::new("mr", "mar"),
    CodeEntry::new("ms", "may"),
    CodeEntry::new("mt", "mlt"),
    CodeEntry::new("my", "bur"),
    CodeEntry::new("na", "nau"),
    CodeEntry::new("nb", "nob"),
    CodeEntry::new("nd", "nde"),
    CodeEntry::new("ne", "nep"),
    CodeEntry::new("ng", "ndo"),
    CodeEntry::new("nl", "dut"),
    CodeEntry::new("nn", "nno"),
    CodeEntry::new("no", "nor"),
    CodeEntry::new("nr", "nbl"),
    CodeEntry::new("nv", "nav"),
    CodeEntry::new("ny", "nya"),
    CodeEntry::new("oc", "oci"),
    CodeEntry::new("oj", "oji"),
    CodeEntry::new("om", "orm"),
    CodeEntry::new("or", "ori"),
    CodeEntry::new("os", "oss"),
    CodeEntry::new("pa", "pan"),
    CodeEntry::new("pi", "pli"),
    CodeEntry::new("pl", "pol"),
    CodeEntry::new("ps", "pus"),
    CodeEntry::new("pt", "por"),
    CodeEntry::new("qu", "que"),
    CodeEntry::new("rm", "roh"),
    CodeEntry::new("rn", "run"),
    CodeEntry::new("ro", "rum"),
    CodeEntry::new("ru", "rus"),
    CodeEntry::new("rw", "kin"),
    CodeEntry::new("sa", "san"),
    CodeEntry::new("sc", "srd"),
    CodeEntry::new("sd", "snd"),
    CodeEntry::new("se", "sme"),
    CodeEntry::new("sg", "sag"),
    CodeEntry::new("si", "sin"),
    CodeEntry::new("sk", "slo"),
    CodeEntry::new("sl", "slv"),
    CodeEntry::new("sm", "smo"),
    CodeEntry::new("sn", "sna"),
    CodeEntry::new("so", "som"),
    CodeEntry::new("sq", "alb"),
    CodeEntry::new("sr", "srp"),
    CodeEntry::new("ss", "ssw"),
    CodeEntry::new("st", "sot"),
    CodeEntry::new("su", "sun"),
    CodeEntry::new("sv", "swe"),
    CodeEntry::new("sw", "swa"),
    CodeEntry::new("ta", "tam"),
    CodeEntry::new("te", "tel"),
    CodeEntry::new("tg", "tgk"),
    CodeEntry::new("th", "tha"),
    CodeEntry::new("ti", "tir"),
    CodeEntry::new("tk", "tuk"),
    CodeEntry::new("tl", "tgl"),
    CodeEntry::new("tn", "tsn"),
    CodeEntry::new("to", "ton"),
    CodeEntry::new("tr", "tur"),
    CodeEntry::new("ts", "tso"),
    CodeEntry::new("tt", "tat"),
    CodeEntry::new("tw", "twi"),
    CodeEntry::new("ty", "tah"),
    CodeEntry::new("ug", "uig"),
    CodeEntry::new("uk", "ukr"),
    CodeEntry::new("ur", "urd"),
    CodeEntry::new("uz", "uzb"),
    CodeEntry::new("ve", "ven"),
    CodeEntry::new("vi", "vie"),
    CodeEntry::new("vo", "vol"),
    CodeEntry::new("wa", "wln"),
    CodeEntry::new("wo", "wol"),
    CodeEntry::new("xh", "xho"),
    CodeEntry::new("yi", "yid"),
    CodeEntry::new("yo", "yor"),
    CodeEntry::new("za", "zha"),
    CodeEntry::new("zh", "chi"),
    CodeEntry::new("zu", "zul"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_size() {
        assert_eq!(len(), 184);
        assert_eq!(CODE_TABLE.len(), len());
        assert_eq!(entries().len(), len());
    }

    #[test]
    fn test_builtin_table_is_well_formed() {
        assert!(is_well_formed(CODE_TABLE));
        assert!(is_strictly_sorted(CODE_TABLE));
    }

    #[test]
    fn test_sorted_matches_std_ordering() {
        assert!(CODE_TABLE.windows(2).all(|w| w[0].alpha2 < w[1].alpha2));
    }

    #[test]
    fn test_unsorted_table_rejected() {
        let table = [CodeEntry::new("de", "ger"), CodeEntry::new("da", "dan")];
        assert!(!is_strictly_sorted(&table));
        assert!(!is_well_formed(&table));
    }

    #[test]
    fn test_duplicate_rejected() {
        let table = [CodeEntry::new("en", "eng"), CodeEntry::new("en", "enm")];
        assert!(!is_strictly_sorted(&table));
    }

    #[test]
    fn test_wrong_width_rejected() {
        assert!(!is_well_formed(&[CodeEntry::new("eng", "eng")]));
        assert!(!is_well_formed(&[CodeEntry::new("en", "en")]));
        assert!(is_well_formed(&[CodeEntry::new("en", "eng")]));
    }

    #[test]
    fn test_empty_and_single_tables() {
        assert!(is_well_formed(&[]));
        assert!(is_strictly_sorted(&[CodeEntry::new("zu", "zul")]));
    }

    #[test]
    fn test_bytes_lt_prefix_ordering() {
        assert!(bytes_lt(b"a", b"aa"));
        assert!(!bytes_lt(b"aa", b"a"));
        assert!(!bytes_lt(b"aa", b"aa"));
        assert!(bytes_lt(b"EN", b"aa"));
    }

    #[test]
    fn test_bibliographic_variants() {
        let find = |code: &str| CODE_TABLE.iter().find(|e| e.alpha2 == code).map(|e| e.alpha3);
        assert_eq!(find("de"), Some("ger"));
        assert_eq!(find("fr"), Some("fre"));
        assert_eq!(find("zh"), Some("chi"));
        assert_eq!(find("bo"), Some("tib"));
        assert_eq!(find("cy"), Some("wel"));
        assert_eq!(find("sq"), Some("alb"));
    }
}
