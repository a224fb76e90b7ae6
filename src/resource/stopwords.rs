//! Stopword lists for Indonesian and English.
//!
//! The Indonesian set is assembled from three pieces: a base list of common
//! function words, minus a fixed negation exception list, plus a curated
//! noise list for social-media comments (pronouns and address terms, chat
//! abbreviations, and known stemming-leak artifacts). The negation words
//! are kept out of the combined set so that sentiment-bearing negation
//! survives filtering. The English set is the standard NLTK list, used
//! unmodified — the negation asymmetry with Indonesian is deliberate.

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::config::Language;

/// Base Indonesian function-word list.
const INDONESIAN_BASE_STOP_WORDS: &[&str] = &[
    "yang", "untuk", "pada", "ke", "para", "namun", "menurut", "antara", "dia", "dua", "ia",
    "seperti", "jika", "sehingga", "kembali", "dan", "tidak", "ini", "kepada", "oleh", "saat",
    "harus", "sementara", "setelah", "belum", "kami", "sekitar", "bagi", "serta", "di", "dari",
    "telah", "sebagai", "masih", "hal", "ketika", "adalah", "itu", "dalam", "bahwa", "atau",
    "hanya", "kita", "dengan", "akan", "juga", "mereka", "sudah", "saya", "terhadap", "secara",
    "agar", "lain", "anda", "begitu", "mengapa", "kenapa", "yaitu", "yakni", "daripada", "itulah",
    "lagi", "maka", "tentang", "demi", "dimana", "kemana", "pula", "sambil", "sebelum", "sesudah",
    "supaya", "guna", "kah", "pun", "sampai", "sedangkan", "selagi", "tetapi", "apakah",
    "kecuali", "sebab", "selain", "seolah", "seraya", "tanpa", "agak", "boleh", "dapat", "dsb",
    "dst", "dll", "dahulu", "dulunya", "anu", "demikian", "ingin", "mari", "nanti", "melainkan",
    "oh", "ok", "seharusnya", "sebetulnya", "setiap", "setidaknya", "sesuatu", "pasti", "saja",
    "toh", "walau", "tolong", "tentu", "amat", "apalagi", "bagaimanapun", "bukan", "jangan",
    "kurang", "tak", "bisa", "ada", "mana", "sini", "situ", "kapan", "bagaimana", "semua",
];

/// Negation words excluded from the Indonesian set so sentiment-bearing
/// negation survives stopword removal.
pub const NEGATION_WORDS: &[&str] = &["tidak", "tak", "jangan", "bukan", "belum", "kurang"];

/// Curated noise words for Indonesian social-media comments.
const INDONESIAN_NOISE_WORDS: &[&str] = &[
    // pronouns and address terms
    "aku", "akuu", "saya", "sy", "gw", "gue", "lu", "lo", "kamu", "kamuu", "kita", "dia", "kak",
    "kakak", "mas", "bro", "sis", "min", "minn", "mimin", "gan", "bang", "pak", "bu", "bapak",
    "ibu",
    // stemming-leak artifacts around the root "jadi"
    "jadi", "menjadi", "terjadi", "dijadikan", "kejadian", "jadinya",
    // chat abbreviations and general noise
    "moga", "banget", "bgt", "nya", "ya", "yaa", "iya", "pas", "dpt", "dn", "ada", "bisa",
    "juga", "doang", "dlm", "tapi", "tp", "tpi", "ga", "gak", "nggak", "enggak", "gaes", "guys",
    "jg", "bln", "ny", "sampe", "nih", "tuh", "sih", "dong", "deh", "kok", "mah", "udh", "sdh",
    "dah", "yg", "dgn", "utk", "karena", "krn", "aja", "sja", "lg", "lagi", "smoga", "smg",
    "kyk", "kek", "kalo", "kalau", "kl", "mau", "apa", "kenapa", "gimana", "kapan", "mana",
    "nichh", "tadi", "segini", "begini", "begitu", "udah",
];

/// Standard English stopword list (NLTK).
const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Combined Indonesian stopword set: (base − negation) ∪ noise.
pub static INDONESIAN_STOP_WORDS_SET: LazyLock<Arc<HashSet<String>>> = LazyLock::new(|| {
    let negation: HashSet<&str> = NEGATION_WORDS.iter().copied().collect();
    let set: HashSet<String> = INDONESIAN_BASE_STOP_WORDS
        .iter()
        .filter(|w| !negation.contains(*w))
        .chain(INDONESIAN_NOISE_WORDS.iter())
        .map(|&s| s.to_string())
        .collect();
    Arc::new(set)
});

/// English stopword set.
pub static ENGLISH_STOP_WORDS_SET: LazyLock<Arc<HashSet<String>>> = LazyLock::new(|| {
    let set: HashSet<String> = ENGLISH_STOP_WORDS.iter().map(|&s| s.to_string()).collect();
    Arc::new(set)
});

/// The combined stopword set for a language.
pub fn stopword_set(language: Language) -> Arc<HashSet<String>> {
    match language {
        Language::Indonesian => Arc::clone(&*INDONESIAN_STOP_WORDS_SET),
        Language::English => Arc::clone(&*ENGLISH_STOP_WORDS_SET),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negation_words_excluded_from_indonesian_set() {
        let set = stopword_set(Language::Indonesian);
        for word in NEGATION_WORDS {
            assert!(!set.contains(*word), "negation word {word} must be kept");
        }
    }

    #[test]
    fn test_indonesian_noise_words_present() {
        let set = stopword_set(Language::Indonesian);
        for word in ["ga", "aja", "sih", "bgt", "udah", "yang"] {
            assert!(set.contains(word), "{word} should be a stopword");
        }
    }

    #[test]
    fn test_english_set_is_unmodified() {
        let set = stopword_set(Language::English);
        // English keeps its negation words; only Indonesian preserves them
        assert!(set.contains("not"));
        assert!(set.contains("no"));
        assert!(set.contains("the"));
        assert!(!set.contains("yang"));
    }
}
