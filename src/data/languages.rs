// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-2 language table.
//!
//! Keyed by the terminologic code. Languages without an ISO 639-1 code
//! (Filipino, Papiamento, Tok Pisin, ...) carry an empty `alpha2`.
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

use crate::types::Language;

macro_rules! language {
    ($alpha3:literal, $alpha2:literal, $bibliographic:literal, $name:literal) => {
        Language {
            name: $name,
            alpha2: $alpha2,
            alpha3: $alpha3,
            bibliographic: $bibliographic,
        }
    };
}

pub(crate) const LANGUAGES: &[Language] = &[
    language!("aar", "aa", "", "Afar"),
    language!("abk", "ab", "", "Abkhazian"),
    language!("afr", "af", "", "Afrikaans"),
    language!("aka", "ak", "", "Akan"),
    language!("amh", "am", "", "Amharic"),
    language!("ara", "ar", "", "Arabic"),
    language!("aym", "ay", "", "Aymara"),
    language!("aze", "az", "", "Azerbaijani"),
    language!("bam", "bm", "", "Bambara"),
    language!("bel", "be", "", "Belarusian"),
    language!("ben", "bn", "", "Bengali"),
    language!("bis", "bi", "", "Bislama"),
    language!("bod", "bo", "tib", "Tibetan"),
    language!("bos", "bs", "", "Bosnian"),
    language!("bre", "br", "", "Breton"),
    language!("bul", "bg", "", "Bulgarian"),
    language!("cat", "ca", "", "Catalan"),
    language!("ces", "cs", "cze", "Czech"),
    language!("cha", "ch", "", "Chamorro"),
    language!("cor", "kw", "", "Cornish"),
    language!("cos", "co", "", "Corsican"),
    language!("cym", "cy", "wel", "Welsh"),
    language!("dan", "da", "", "Danish"),
    language!("deu", "de", "ger", "German"),
    language!("div", "dv", "", "Divehi"),
    language!("dzo", "dz", "", "Dzongkha"),
    language!("ell", "el", "gre", "Greek"),
    language!("eng", "en", "", "English"),
    language!("epo", "eo", "", "Esperanto"),
    language!("est", "et", "", "Estonian"),
    language!("eus", "eu", "baq", "Basque"),
    language!("ewe", "ee", "", "Ewe"),
    language!("fao", "fo", "", "Faroese"),
    language!("fas", "fa", "per", "Persian"),
    language!("fij", "fj", "", "Fijian"),
    language!("fil", "", "", "Filipino"),
    language!("fin", "fi", "", "Finnish"),
    language!("fra", "fr", "fre", "French"),
    language!("fry", "fy", "", "Western Frisian"),
    language!("ful", "ff", "", "Fulah"),
    language!("gil", "", "", "Gilbertese"),
    language!("gla", "gd", "", "Gaelic"),
    language!("gle", "ga", "", "Irish"),
    language!("glg", "gl", "", "Galician"),
    language!("glv", "gv", "", "Manx"),
    language!("grn", "gn", "", "Guarani"),
    language!("guj", "gu", "", "Gujarati"),
    language!("hat", "ht", "", "Haitian"),
    language!("hau", "ha", "", "Hausa"),
    language!("heb", "he", "", "Hebrew"),
    language!("her", "hz", "", "Herero"),
    language!("hin", "hi", "", "Hindi"),
    language!("hmo", "ho", "", "Hiri Motu"),
    language!("hrv", "hr", "", "Croatian"),
    language!("hun", "hu", "", "Hungarian"),
    language!("hye", "hy", "arm", "Armenian"),
    language!("ibo", "ig", "", "Igbo"),
    language!("ind", "id", "", "Indonesian"),
    language!("isl", "is", "ice", "Icelandic"),
    language!("ita", "it", "", "Italian"),
    language!("jav", "jv", "", "Javanese"),
    language!("jpn", "ja", "", "Japanese"),
    language!("kal", "kl", "", "Kalaallisut"),
    language!("kan", "kn", "", "Kannada"),
    language!("kat", "ka", "geo", "Georgian"),
    language!("kaz", "kk", "", "Kazakh"),
    language!("khm", "km", "", "Central Khmer"),
    language!("kin", "rw", "", "Kinyarwanda"),
    language!("kir", "ky", "", "Kirghiz"),
    language!("kon", "kg", "", "Kongo"),
    language!("kor", "ko", "", "Korean"),
    language!("kua", "kj", "", "Kuanyama"),
    language!("kur", "ku", "", "Kurdish"),
    language!("lao", "lo", "", "Lao"),
    language!("lat", "la", "", "Latin"),
    language!("lav", "lv", "", "Latvian"),
    language!("lin", "ln", "", "Lingala"),
    language!("lit", "lt", "", "Lithuanian"),
    language!("ltz", "lb", "", "Luxembourgish"),
    language!("lub", "lu", "", "Luba-Katanga"),
    language!("lug", "lg", "", "Ganda"),
    language!("mah", "mh", "", "Marshallese"),
    language!("mal", "ml", "", "Malayalam"),
    language!("mar", "mr", "", "Marathi"),
    language!("mkd", "mk", "mac", "Macedonian"),
    language!("mlg", "mg", "", "Malagasy"),
    language!("mlt", "mt", "", "Maltese"),
    language!("mon", "mn", "", "Mongolian"),
    language!("mri", "mi", "mao", "Maori"),
    language!("msa", "ms", "may", "Malay"),
    language!("mya", "my", "bur", "Burmese"),
    language!("nau", "na", "", "Nauru"),
    language!("nbl", "nr", "", "South Ndebele"),
    language!("nde", "nd", "", "North Ndebele"),
    language!("ndo", "ng", "", "Ndonga"),
    language!("nep", "ne", "", "Nepali"),
    language!("niu", "", "", "Niuean"),
    language!("nld", "nl", "dut", "Dutch"),
    language!("nno", "nn", "", "Norwegian Nynorsk"),
    language!("nob", "nb", "", "Norwegian Bokmål"),
    language!("nor", "no", "", "Norwegian"),
    language!("nya", "ny", "", "Chichewa"),
    language!("orm", "om", "", "Oromo"),
    language!("pan", "pa", "", "Panjabi"),
    language!("pap", "", "", "Papiamento"),
    language!("pau", "", "", "Palauan"),
    language!("pol", "pl", "", "Polish"),
    language!("por", "pt", "", "Portuguese"),
    language!("pus", "ps", "", "Pushto"),
    language!("que", "qu", "", "Quechua"),
    language!("rar", "", "", "Rarotongan"),
    language!("roh", "rm", "", "Romansh"),
    language!("ron", "ro", "rum", "Romanian"),
    language!("run", "rn", "", "Rundi"),
    language!("rus", "ru", "", "Russian"),
    language!("sag", "sg", "", "Sango"),
    language!("san", "sa", "", "Sanskrit"),
    language!("sin", "si", "", "Sinhala"),
    language!("slk", "sk", "slo", "Slovak"),
    language!("slv", "sl", "", "Slovenian"),
    language!("sme", "se", "", "Northern Sami"),
    language!("smo", "sm", "", "Samoan"),
    language!("sna", "sn", "", "Shona"),
    language!("som", "so", "", "Somali"),
    language!("sot", "st", "", "Southern Sotho"),
    language!("spa", "es", "", "Spanish"),
    language!("sqi", "sq", "alb", "Albanian"),
    language!("srp", "sr", "", "Serbian"),
    language!("ssw", "ss", "", "Swati"),
    language!("swa", "sw", "", "Swahili"),
    language!("swe", "sv", "", "Swedish"),
    language!("tah", "ty", "", "Tahitian"),
    language!("tam", "ta", "", "Tamil"),
    language!("tat", "tt", "", "Tatar"),
    language!("tel", "te", "", "Telugu"),
    language!("tet", "", "", "Tetum"),
    language!("tgk", "tg", "", "Tajik"),
    language!("tgl", "tl", "", "Tagalog"),
    language!("tha", "th", "", "Thai"),
    language!("tir", "ti", "", "Tigrinya"),
    language!("tkl", "", "", "Tokelau"),
    language!("ton", "to", "", "Tonga (Tonga Islands)"),
    language!("tpi", "", "", "Tok Pisin"),
    language!("tsn", "tn", "", "Tswana"),
    language!("tso", "ts", "", "Tsonga"),
    language!("tuk", "tk", "", "Turkmen"),
    language!("tur", "tr", "", "Turkish"),
    language!("tvl", "", "", "Tuvalu"),
    language!("ukr", "uk", "", "Ukrainian"),
    language!("urd", "ur", "", "Urdu"),
    language!("uzb", "uz", "", "Uzbek"),
    language!("ven", "ve", "", "Venda"),
    language!("vie", "vi", "", "Vietnamese"),
    language!("wol", "wo", "", "Wolof"),
    language!("xho", "xh", "", "Xhosa"),
    language!("yid", "yi", "", "Yiddish"),
    language!("yor", "yo", "", "Yoruba"),
    language!("zho", "zh", "chi", "Chinese"),
    language!("zul", "zu", "", "Zulu"),
];
