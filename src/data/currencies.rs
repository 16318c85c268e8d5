// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 4217 currency table.
//!
//! Includes the fund codes (`BOV`, `CHE`, `USN`, ...) some countries list
//! alongside their main currency, and a few withdrawn codes still referenced
//! by reserved country rows.

use crate::types::Currency;

macro_rules! currency {
    ($code:literal, $number:literal, $decimals:expr, $symbol:literal, $name:literal) => {
        Currency {
            code: $code,
            name: $name,
            number: $number,
            decimals: $decimals,
            symbol: $symbol,
        }
    };
}

pub(crate) const CURRENCIES: &[Currency] = &[
    currency!("AED", "784", Some(2), "د.إ", "UAE Dirham"),
    currency!("AFN", "971", Some(2), "؋", "Afghani"),
    currency!("ALL", "008", Some(2), "L", "Lek"),
    currency!("AMD", "051", Some(2), "֏", "Armenian Dram"),
    currency!("ANG", "532", Some(2), "ƒ", "Netherlands Antillean Guilder"),
    currency!("AOA", "973", Some(2), "Kz", "Kwanza"),
    currency!("ARS", "032", Some(2), "$", "Argentine Peso"),
    currency!("AUD", "036", Some(2), "$", "Australian Dollar"),
    currency!("AWG", "533", Some(2), "ƒ", "Aruban Florin"),
    currency!("AZN", "944", Some(2), "₼", "Azerbaijanian Manat"),
    currency!("BAM", "977", Some(2), "KM", "Convertible Mark"),
    currency!("BBD", "052", Some(2), "$", "Barbados Dollar"),
    currency!("BDT", "050", Some(2), "৳", "Taka"),
    currency!("BGN", "975", Some(2), "лв", "Bulgarian Lev"),
    currency!("BHD", "048", Some(3), ".د.ب", "Bahraini Dinar"),
    currency!("BIF", "108", Some(0), "FBu", "Burundi Franc"),
    currency!("BMD", "060", Some(2), "$", "Bermudian Dollar"),
    currency!("BND", "096", Some(2), "$", "Brunei Dollar"),
    currency!("BOB", "068", Some(2), "Bs.", "Boliviano"),
    currency!("BOV", "984", Some(2), "", "Mvdol"),
    currency!("BRL", "986", Some(2), "R$", "Brazilian Real"),
    currency!("BSD", "044", Some(2), "$", "Bahamian Dollar"),
    currency!("BTN", "064", Some(2), "Nu.", "Ngultrum"),
    currency!("BWP", "072", Some(2), "P", "Pula"),
    currency!("BYN", "933", Some(2), "Br", "Belarussian Ruble"),
    currency!("BZD", "084", Some(2), "$", "Belize Dollar"),
    currency!("CAD", "124", Some(2), "$", "Canadian Dollar"),
    currency!("CDF", "976", Some(2), "FC", "Congolese Franc"),
    currency!("CHE", "947", Some(2), "", "WIR Euro"),
    currency!("CHF", "756", Some(2), "CHF", "Swiss Franc"),
    currency!("CHW", "948", Some(2), "", "WIR Franc"),
    currency!("CLF", "990", Some(4), "UF", "Unidades de fomento"),
    currency!("CLP", "152", Some(0), "$", "Chilean Peso"),
    currency!("CNY", "156", Some(2), "¥", "Yuan Renminbi"),
    currency!("COP", "170", Some(2), "$", "Colombian Peso"),
    currency!("COU", "970", Some(2), "", "Unidad de Valor Real"),
    currency!("CRC", "188", Some(2), "₡", "Costa Rican Colon"),
    currency!("CUC", "931", Some(2), "$", "Peso Convertible"),
    currency!("CUP", "192", Some(2), "$", "Cuban Peso"),
    currency!("CVE", "132", Some(2), "$", "Cape Verde Escudo"),
    currency!("CZK", "203", Some(2), "Kč", "Czech Koruna"),
    currency!("DJF", "262", Some(0), "Fdj", "Djibouti Franc"),
    currency!("DKK", "208", Some(2), "kr", "Danish Krone"),
    currency!("DOP", "214", Some(2), "RD$", "Dominican Peso"),
    currency!("DZD", "012", Some(2), "د.ج", "Algerian Dinar"),
    currency!("EGP", "818", Some(2), "£", "Egyptian Pound"),
    currency!("ERN", "232", Some(2), "Nfk", "Nakfa"),
    currency!("ETB", "230", Some(2), "Br", "Ethiopian Birr"),
    currency!("EUR", "978", Some(2), "€", "Euro"),
    currency!("FJD", "242", Some(2), "$", "Fiji Dollar"),
    currency!("FKP", "238", Some(2), "£", "Falkland Islands Pound"),
    currency!("GBP", "826", Some(2), "£", "Pound Sterling"),
    currency!("GEL", "981", Some(2), "₾", "Lari"),
    currency!("GHS", "936", Some(2), "₵", "Ghana Cedi"),
    currency!("GIP", "292", Some(2), "£", "Gibraltar Pound"),
    currency!("GMD", "270", Some(2), "D", "Dalasi"),
    currency!("GNF", "324", Some(0), "FG", "Guinea Franc"),
    currency!("GTQ", "320", Some(2), "Q", "Quetzal"),
    currency!("GYD", "328", Some(2), "$", "Guyana Dollar"),
    currency!("HKD", "344", Some(2), "$", "Hong Kong Dollar"),
    currency!("HNL", "340", Some(2), "L", "Lempira"),
    currency!("HTG", "332", Some(2), "G", "Gourde"),
    currency!("HUF", "348", Some(2), "Ft", "Forint"),
    currency!("IDR", "360", Some(2), "Rp", "Rupiah"),
    currency!("ILS", "376", Some(2), "₪", "New Israeli Sheqel"),
    currency!("INR", "356", Some(2), "₹", "Indian Rupee"),
    currency!("IQD", "368", Some(3), "ع.د", "Iraqi Dinar"),
    currency!("IRR", "364", Some(2), "﷼", "Iranian Rial"),
    currency!("ISK", "352", Some(0), "kr", "Iceland Krona"),
    currency!("JMD", "388", Some(2), "J$", "Jamaican Dollar"),
    currency!("JOD", "400", Some(3), "د.ا", "Jordanian Dinar"),
    currency!("JPY", "392", Some(0), "¥", "Yen"),
    currency!("KES", "404", Some(2), "KSh", "Kenyan Shilling"),
    currency!("KGS", "417", Some(2), "с", "Som"),
    currency!("KHR", "116", Some(2), "៛", "Riel"),
    currency!("KMF", "174", Some(0), "CF", "Comoro Franc"),
    currency!("KPW", "408", Some(2), "₩", "North Korean Won"),
    currency!("KRW", "410", Some(0), "₩", "Won"),
    currency!("KWD", "414", Some(3), "د.ك", "Kuwaiti Dinar"),
    currency!("KYD", "136", Some(2), "$", "Cayman Islands Dollar"),
    currency!("KZT", "398", Some(2), "₸", "Tenge"),
    currency!("LAK", "418", Some(2), "₭", "Kip"),
    currency!("LBP", "422", Some(2), "ل.ل", "Lebanese Pound"),
    currency!("LKR", "144", Some(2), "Rs", "Sri Lanka Rupee"),
    currency!("LRD", "430", Some(2), "$", "Liberian Dollar"),
    currency!("LSL", "426", Some(2), "L", "Loti"),
    currency!("LYD", "434", Some(3), "ل.د", "Libyan Dinar"),
    currency!("MAD", "504", Some(2), "د.م.", "Moroccan Dirham"),
    currency!("MDL", "498", Some(2), "L", "Moldovan Leu"),
    currency!("MGA", "969", Some(2), "Ar", "Malagasy Ariary"),
    currency!("MKD", "807", Some(2), "ден", "Denar"),
    currency!("MMK", "104", Some(2), "K", "Kyat"),
    currency!("MNT", "496", Some(2), "₮", "Tugrik"),
    currency!("MOP", "446", Some(2), "MOP$", "Pataca"),
    currency!("MRU", "929", Some(2), "UM", "Ouguiya"),
    currency!("MUR", "480", Some(2), "₨", "Mauritius Rupee"),
    currency!("MVR", "462", Some(2), "Rf", "Rufiyaa"),
    currency!("MWK", "454", Some(2), "MK", "Kwacha"),
    currency!("MXN", "484", Some(2), "$", "Mexican Peso"),
    currency!("MXV", "979", Some(2), "", "Mexican Unidad de Inversion (UDI)"),
    currency!("MYR", "458", Some(2), "RM", "Malaysian Ringgit"),
    currency!("MZN", "943", Some(2), "MT", "Mozambique Metical"),
    currency!("NAD", "516", Some(2), "$", "Namibia Dollar"),
    currency!("NGN", "566", Some(2), "₦", "Naira"),
    currency!("NIO", "558", Some(2), "C$", "Cordoba Oro"),
    currency!("NOK", "578", Some(2), "kr", "Norwegian Krone"),
    currency!("NPR", "524", Some(2), "₨", "Nepalese Rupee"),
    currency!("NZD", "554", Some(2), "$", "New Zealand Dollar"),
    currency!("OMR", "512", Some(3), "ر.ع.", "Rial Omani"),
    currency!("PAB", "590", Some(2), "B/.", "Balboa"),
    currency!("PEN", "604", Some(2), "S/", "Sol"),
    currency!("PGK", "598", Some(2), "K", "Kina"),
    currency!("PHP", "608", Some(2), "₱", "Philippine Peso"),
    currency!("PKR", "586", Some(2), "₨", "Pakistan Rupee"),
    currency!("PLN", "985", Some(2), "zł", "Zloty"),
    currency!("PYG", "600", Some(0), "₲", "Guarani"),
    currency!("QAR", "634", Some(2), "ر.ق", "Qatari Rial"),
    currency!("RON", "946", Some(2), "lei", "New Romanian Leu"),
    currency!("RSD", "941", Some(2), "дин.", "Serbian Dinar"),
    currency!("RUB", "643", Some(2), "₽", "Russian Ruble"),
    currency!("RWF", "646", Some(0), "FRw", "Rwanda Franc"),
    currency!("SAR", "682", Some(2), "ر.س", "Saudi Riyal"),
    currency!("SBD", "090", Some(2), "$", "Solomon Islands Dollar"),
    currency!("SCR", "690", Some(2), "₨", "Seychelles Rupee"),
    currency!("SDG", "938", Some(2), "£", "Sudanese Pound"),
    currency!("SEK", "752", Some(2), "kr", "Swedish Krona"),
    currency!("SGD", "702", Some(2), "$", "Singapore Dollar"),
    currency!("SHP", "654", Some(2), "£", "Saint Helena Pound"),
    currency!("SLE", "925", Some(2), "Le", "Leone"),
    currency!("SOS", "706", Some(2), "S", "Somali Shilling"),
    currency!("SRD", "968", Some(2), "$", "Surinam Dollar"),
    currency!("SSP", "728", Some(2), "£", "South Sudanese Pound"),
    currency!("STN", "930", Some(2), "Db", "Dobra"),
    currency!("SYP", "760", Some(2), "£", "Syrian Pound"),
    currency!("SZL", "748", Some(2), "E", "Lilangeni"),
    currency!("THB", "764", Some(2), "฿", "Baht"),
    currency!("TJS", "972", Some(2), "SM", "Somoni"),
    currency!("TMT", "934", Some(2), "m", "Turkmenistan New Manat"),
    currency!("TND", "788", Some(3), "د.ت", "Tunisian Dinar"),
    currency!("TOP", "776", Some(2), "T$", "Pa'anga"),
    currency!("TRY", "949", Some(2), "₺", "Turkish Lira"),
    currency!("TTD", "780", Some(2), "TT$", "Trinidad and Tobago Dollar"),
    currency!("TWD", "901", Some(2), "NT$", "New Taiwan Dollar"),
    currency!("TZS", "834", Some(2), "TSh", "Tanzanian Shilling"),
    currency!("UAH", "980", Some(2), "₴", "Hryvnia"),
    currency!("UGX", "800", Some(0), "USh", "Uganda Shilling"),
    currency!("USD", "840", Some(2), "$", "US Dollar"),
    currency!("USN", "997", Some(2), "", "US Dollar (Next day)"),
    currency!("UYI", "940", Some(0), "", "Uruguay Peso en Unidades Indexadas (URUIURUI)"),
    currency!("UYU", "858", Some(2), "$U", "Peso Uruguayo"),
    currency!("UZS", "860", Some(2), "so'm", "Uzbekistan Sum"),
    currency!("VED", "926", Some(2), "Bs.D", "Bolívar Soberano"),
    currency!("VES", "928", Some(2), "Bs.S", "Bolívar Soberano"),
    currency!("VND", "704", Some(0), "₫", "Dong"),
    currency!("VUV", "548", Some(0), "VT", "Vatu"),
    currency!("WST", "882", Some(2), "T", "Tala"),
    currency!("XAF", "950", Some(0), "FCFA", "CFA Franc BEAC"),
    currency!("XAG", "961", None, "", "Silver"),
    currency!("XAU", "959", None, "", "Gold"),
    currency!("XCD", "951", Some(2), "$", "East Caribbean Dollar"),
    currency!("XCG", "532", Some(2), "Cg", "Caribbean Guilder"),
    currency!("XDR", "960", None, "", "SDR (Special Drawing Right)"),
    currency!("XOF", "952", Some(0), "CFA", "CFA Franc BCEAO"),
    currency!("XPD", "964", None, "", "Palladium"),
    currency!("XPF", "953", Some(0), "₣", "CFP Franc"),
    currency!("XPT", "962", None, "", "Platinum"),
    currency!("YER", "886", Some(2), "﷼", "Yemeni Rial"),
    currency!("ZAR", "710", Some(2), "R", "Rand"),
    currency!("ZMW", "967", Some(2), "ZK", "Zambian Kwacha"),
    currency!("ZWG", "924", Some(2), "ZiG", "Zimbabwe Gold"),
];
