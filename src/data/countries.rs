// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 3166-1 country table.
//!
//! Columns: alpha-2, alpha-3, English name, Korean name, status, currencies,
//! languages (ISO 639-2/T), calling codes, IOC code.

use super::CountryRow;
use crate::types::Status;

macro_rules! country {
    (
        $alpha2:literal, $alpha3:literal, $name:literal, $kor_name:literal, $status:ident,
        [$($currency:literal),*], [$($language:literal),*], [$($calling:literal),*], $ioc:literal
    ) => {
        CountryRow {
            alpha2: $alpha2,
            alpha3: $alpha3,
            name: $name,
            kor_name: $kor_name,
            status: Status::$status,
            currencies: &[$($currency),*],
            languages: &[$($language),*],
            calling_codes: &[$($calling),*],
            ioc: $ioc,
        }
    };
}

pub(crate) const COUNTRIES: &[CountryRow] = &[
    country!("AC", "ASC", "Ascension Island", "어센션섬", ExceptionallyReserved, ["SHP"], ["eng"], ["+247"], ""),
    country!("AD", "AND", "Andorra", "안도라", Assigned, ["EUR"], ["cat"], ["+376"], "AND"),
    country!("AE", "ARE", "United Arab Emirates", "아랍에미리트", Assigned, ["AED"], ["ara"], ["+971"], "UAE"),
    country!("AF", "AFG", "Afghanistan", "아프가니스탄", Assigned, ["AFN"], ["pus", "fas"], ["+93"], "AFG"),
    country!("AG", "ATG", "Antigua And Barbuda", "앤티가 바부다", Assigned, ["XCD"], ["eng"], ["+1 268"], "ANT"),
    country!("AI", "AIA", "Anguilla", "앵귈라", Assigned, ["XCD"], ["eng"], ["+1 264"], ""),
    country!("AL", "ALB", "Albania", "알바니아", Assigned, ["ALL"], ["sqi"], ["+355"], "ALB"),
    country!("AM", "ARM", "Armenia", "아르메니아", Assigned, ["AMD"], ["hye", "rus"], ["+374"], "ARM"),
    country!("AN", "ANT", "Netherlands Antilles", "네덜란드령 안틸레스", TransitionallyReserved, ["ANG"], ["nld", "eng", "pap"], ["+599"], "AHO"),
    country!("AO", "AGO", "Angola", "앙골라", Assigned, ["AOA"], ["por"], ["+244"], "ANG"),
    country!("AQ", "ATA", "Antarctica", "남극", Assigned, [], [], ["+672"], ""),
    country!("AR", "ARG", "Argentina", "아르헨티나", Assigned, ["ARS"], ["spa", "grn"], ["+54"], "ARG"),
    country!("AS", "ASM", "American Samoa", "아메리칸사모아", Assigned, ["USD"], ["eng", "smo"], ["+1 684"], "ASA"),
    country!("AT", "AUT", "Austria", "오스트리아", Assigned, ["EUR"], ["deu"], ["+43"], "AUT"),
    country!("AU", "AUS", "Australia", "오스트레일리아", Assigned, ["AUD"], ["eng"], ["+61"], "AUS"),
    country!("AW", "ABW", "Aruba", "아루바", Assigned, ["AWG"], ["nld", "pap"], ["+297"], "ARU"),
    country!("AX", "ALA", "Åland Islands", "올란드 제도", Assigned, ["EUR"], ["swe"], ["+358"], ""),
    country!("AZ", "AZE", "Azerbaijan", "아제르바이잔", Assigned, ["AZN"], ["aze"], ["+994"], "AZE"),
    country!("BA", "BIH", "Bosnia & Herzegovina", "보스니아 헤르체고비나", Assigned, ["BAM"], ["bos", "hrv", "srp"], ["+387"], "BIH"),
    country!("BB", "BRB", "Barbados", "바베이도스", Assigned, ["BBD"], ["eng"], ["+1 246"], "BAR"),
    country!("BD", "BGD", "Bangladesh", "방글라데시", Assigned, ["BDT"], ["ben"], ["+880"], "BAN"),
    country!("BE", "BEL", "Belgium", "벨기에", Assigned, ["EUR"], ["nld", "fra", "deu"], ["+32"], "BEL"),
    country!("BF", "BFA", "Burkina Faso", "부르키나파소", Assigned, ["XOF"], ["fra"], ["+226"], "BUR"),
    country!("BG", "BGR", "Bulgaria", "불가리아", Assigned, ["EUR"], ["bul"], ["+359"], "BUL"),
    country!("BH", "BHR", "Bahrain", "바레인", Assigned, ["BHD"], ["ara"], ["+973"], "BRN"),
    country!("BI", "BDI", "Burundi", "부룬디", Assigned, ["BIF"], ["run", "fra"], ["+257"], "BDI"),
    country!("BJ", "BEN", "Benin", "베냉", Assigned, ["XOF"], ["fra"], ["+229"], "BEN"),
    country!("BL", "BLM", "Saint Barthélemy", "생바르텔레미", Assigned, ["EUR"], ["fra"], ["+590"], ""),
    country!("BM", "BMU", "Bermuda", "버뮤다", Assigned, ["BMD"], ["eng"], ["+1 441"], "BER"),
    country!("BN", "BRN", "Brunei Darussalam", "브루나이", Assigned, ["BND"], ["msa", "eng"], ["+673"], "BRU"),
    country!("BO", "BOL", "Bolivia, Plurinational State Of", "볼리비아", Assigned, ["BOB", "BOV"], ["spa", "aym", "que"], ["+591"], "BOL"),
    country!("BQ", "BES", "Bonaire, Sint Eustatius And Saba", "카리브 네덜란드", Assigned, ["USD"], ["nld"], ["+599"], ""),
    country!("BR", "BRA", "Brazil", "브라질", Assigned, ["BRL"], ["por"], ["+55"], "BRA"),
    country!("BS", "BHS", "Bahamas", "바하마", Assigned, ["BSD"], ["eng"], ["+1 242"], "BAH"),
    country!("BT", "BTN", "Bhutan", "부탄", Assigned, ["INR", "BTN"], ["dzo"], ["+975"], "BHU"),
    country!("BU", "BUR", "Burma", "버마", TransitionallyReserved, [], [], [], ""),
    country!("BV", "BVT", "Bouvet Island", "부베섬", Assigned, ["NOK"], [], [], ""),
    country!("BW", "BWA", "Botswana", "보츠와나", Assigned, ["BWP"], ["eng", "tsn"], ["+267"], "BOT"),
    country!("BY", "BLR", "Belarus", "벨라루스", Assigned, ["BYN"], ["bel", "rus"], ["+375"], "BLR"),
    country!("BY", "BYS", "Byelorussian SSR", "벨로루시 소비에트 사회주의 공화국", Deleted, [], ["bel", "rus"], [], ""),
    country!("BZ", "BLZ", "Belize", "벨리즈", Assigned, ["BZD"], ["eng"], ["+501"], "BIZ"),
    country!("CA", "CAN", "Canada", "캐나다", Assigned, ["CAD"], ["eng", "fra"], ["+1"], "CAN"),
    country!("CC", "CCK", "Cocos (Keeling) Islands", "코코스 제도", Assigned, ["AUD"], ["eng"], ["+61"], ""),
    country!("CD", "COD", "Democratic Republic Of Congo", "콩고 민주 공화국", Assigned, ["CDF"], ["fra", "lin", "kon", "swa", "lub"], ["+243"], "COD"),
    country!("CF", "CAF", "Central African Republic", "중앙아프리카 공화국", Assigned, ["XAF"], ["fra", "sag"], ["+236"], "CAF"),
    country!("CG", "COG", "Republic Of Congo", "콩고 공화국", Assigned, ["XAF"], ["fra", "lin"], ["+242"], "CGO"),
    country!("CH", "CHE", "Switzerland", "스위스", Assigned, ["CHF", "CHE", "CHW"], ["deu", "fra", "ita", "roh"], ["+41"], "SUI"),
    country!("CI", "CIV", "Côte d'Ivoire", "코트디부아르", Assigned, ["XOF"], ["fra"], ["+225"], "CIV"),
    country!("CK", "COK", "Cook Islands", "쿡 제도", Assigned, ["NZD"], ["eng", "rar"], ["+682"], "COK"),
    country!("CL", "CHL", "Chile", "칠레", Assigned, ["CLP", "CLF"], ["spa"], ["+56"], "CHI"),
    country!("CM", "CMR", "Cameroon", "카메룬", Assigned, ["XAF"], ["fra", "eng"], ["+237"], "CMR"),
    country!("CN", "CHN", "China", "중국", Assigned, ["CNY"], ["zho"], ["+86"], "CHN"),
    country!("CO", "COL", "Colombia", "콜롬비아", Assigned, ["COP", "COU"], ["spa"], ["+57"], "COL"),
    country!("CP", "CPT", "Clipperton Island", "클리퍼턴섬", ExceptionallyReserved, ["EUR"], ["fra"], [], ""),
    country!("CR", "CRI", "Costa Rica", "코스타리카", Assigned, ["CRC"], ["spa"], ["+506"], "CRC"),
    country!("CS", "SCG", "Serbia and Montenegro", "세르비아 몬테네그로", TransitionallyReserved, [], ["srp"], ["+381"], "SCG"),
    country!("CU", "CUB", "Cuba", "쿠바", Assigned, ["CUP", "CUC"], ["spa"], ["+53"], "CUB"),
    country!("CV", "CPV", "Cabo Verde", "카보베르데", Assigned, ["CVE"], ["por"], ["+238"], "CPV"),
    country!("CW", "CUW", "Curacao", "퀴라소", Assigned, ["XCG"], ["nld", "pap"], ["+599"], ""),
    country!("CX", "CXR", "Christmas Island", "크리스마스섬", Assigned, ["AUD"], ["eng"], ["+61"], ""),
    country!("CY", "CYP", "Cyprus", "키프로스", Assigned, ["EUR"], ["ell", "tur"], ["+357"], "CYP"),
    country!("CZ", "CZE", "Czech Republic", "체코", Assigned, ["CZK"], ["ces"], ["+420"], "CZE"),
    country!("DD", "DDR", "German Democratic Republic", "독일 민주 공화국", Deleted, [], ["deu"], [], "GDR"),
    country!("DE", "DEU", "Germany", "독일", Assigned, ["EUR"], ["deu"], ["+49"], "GER"),
    country!("DG", "DGA", "Diego Garcia", "디에고가르시아섬", ExceptionallyReserved, ["USD"], ["eng"], ["+246"], ""),
    country!("DJ", "DJI", "Djibouti", "지부티", Assigned, ["DJF"], ["ara", "fra"], ["+253"], "DJI"),
    country!("DK", "DNK", "Denmark", "덴마크", Assigned, ["DKK"], ["dan"], ["+45"], "DEN"),
    country!("DM", "DMA", "Dominica", "도미니카 연방", Assigned, ["XCD"], ["eng"], ["+1 767"], "DMA"),
    country!("DO", "DOM", "Dominican Republic", "도미니카 공화국", Assigned, ["DOP"], ["spa"], ["+1 809", "+1 829", "+1 849"], "DOM"),
    country!("DZ", "DZA", "Algeria", "알제리", Assigned, ["DZD"], ["ara"], ["+213"], "ALG"),
    country!("EA", "", "Ceuta, Melilla", "세우타 멜리야", ExceptionallyReserved, ["EUR"], ["spa"], [], ""),
    country!("EC", "ECU", "Ecuador", "에콰도르", Assigned, ["USD"], ["spa", "que"], ["+593"], "ECU"),
    country!("EE", "EST", "Estonia", "에스토니아", Assigned, ["EUR"], ["est"], ["+372"], "EST"),
    country!("EG", "EGY", "Egypt", "이집트", Assigned, ["EGP"], ["ara"], ["+20"], "EGY"),
    country!("EH", "ESH", "Western Sahara", "서사하라", Assigned, ["MAD"], ["ara"], ["+212"], ""),
    country!("ER", "ERI", "Eritrea", "에리트레아", Assigned, ["ERN"], ["tir", "ara", "eng"], ["+291"], "ERI"),
    country!("ES", "ESP", "Spain", "스페인", Assigned, ["EUR"], ["spa", "cat", "eus", "glg"], ["+34"], "ESP"),
    country!("ET", "ETH", "Ethiopia", "에티오피아", Assigned, ["ETB"], ["amh"], ["+251"], "ETH"),
    country!("EU", "", "European Union", "유럽 연합", ExceptionallyReserved, ["EUR"], [], ["+388"], ""),
    country!("FI", "FIN", "Finland", "핀란드", Assigned, ["EUR"], ["fin", "swe"], ["+358"], "FIN"),
    country!("FJ", "FJI", "Fiji", "피지", Assigned, ["FJD"], ["eng", "fij"], ["+679"], "FIJ"),
    country!("FK", "FLK", "Falkland Islands", "포클랜드 제도", Assigned, ["FKP"], ["eng"], ["+500"], ""),
    country!("FM", "FSM", "Micronesia, Federated States Of", "미크로네시아 연방", Assigned, ["USD"], ["eng"], ["+691"], "FSM"),
    country!("FO", "FRO", "Faroe Islands", "페로 제도", Assigned, ["DKK"], ["fao", "dan"], ["+298"], ""),
    country!("FR", "FRA", "France", "프랑스", Assigned, ["EUR"], ["fra"], ["+33"], "FRA"),
    country!("FX", "FXX", "France, Metropolitan", "프랑스 본토", ExceptionallyReserved, ["EUR"], ["fra"], [], ""),
    country!("GA", "GAB", "Gabon", "가봉", Assigned, ["XAF"], ["fra"], ["+241"], "GAB"),
    country!("GB", "GBR", "United Kingdom", "영국", Assigned, ["GBP"], ["eng", "cym", "gla", "gle", "cor"], ["+44"], "GBR"),
    country!("GD", "GRD", "Grenada", "그레나다", Assigned, ["XCD"], ["eng"], ["+1 473"], "GRN"),
    country!("GE", "GEO", "Georgia", "조지아", Assigned, ["GEL"], ["kat"], ["+995"], "GEO"),
    country!("GF", "GUF", "French Guiana", "프랑스령 기아나", Assigned, ["EUR"], ["fra"], ["+594"], ""),
    country!("GG", "GGY", "Guernsey", "건지섬", Assigned, ["GBP"], ["eng", "fra"], ["+44"], ""),
    country!("GH", "GHA", "Ghana", "가나", Assigned, ["GHS"], ["eng"], ["+233"], "GHA"),
    country!("GI", "GIB", "Gibraltar", "지브롤터", Assigned, ["GIP"], ["eng"], ["+350"], ""),
    country!("GL", "GRL", "Greenland", "그린란드", Assigned, ["DKK"], ["kal"], ["+299"], ""),
    country!("GM", "GMB", "Gambia", "감비아", Assigned, ["GMD"], ["eng"], ["+220"], "GAM"),
    country!("GN", "GIN", "Guinea", "기니", Assigned, ["GNF"], ["fra"], ["+224"], "GUI"),
    country!("GP", "GLP", "Guadeloupe", "과들루프", Assigned, ["EUR"], ["fra"], ["+590"], ""),
    country!("GQ", "GNQ", "Equatorial Guinea", "적도 기니", Assigned, ["XAF"], ["spa", "fra", "por"], ["+240"], "GEQ"),
    country!("GR", "GRC", "Greece", "그리스", Assigned, ["EUR"], ["ell"], ["+30"], "GRE"),
    country!("GS", "SGS", "South Georgia And The South Sandwich Islands", "사우스조지아 사우스샌드위치 제도", Assigned, ["GBP"], ["eng"], [], ""),
    country!("GT", "GTM", "Guatemala", "과테말라", Assigned, ["GTQ"], ["spa"], ["+502"], "GUA"),
    country!("GU", "GUM", "Guam", "괌", Assigned, ["USD"], ["eng", "cha"], ["+1 671"], "GUM"),
    country!("GW", "GNB", "Guinea-bissau", "기니비사우", Assigned, ["XOF"], ["por"], ["+245"], "GBS"),
    country!("GY", "GUY", "Guyana", "가이아나", Assigned, ["GYD"], ["eng"], ["+592"], "GUY"),
    country!("HK", "HKG", "Hong Kong", "홍콩", Assigned, ["HKD"], ["zho", "eng"], ["+852"], "HKG"),
    country!("HM", "HMD", "Heard Island And McDonald Islands", "허드 맥도널드 제도", Assigned, ["AUD"], [], [], ""),
    country!("HN", "HND", "Honduras", "온두라스", Assigned, ["HNL"], ["spa"], ["+504"], "HON"),
    country!("HR", "HRV", "Croatia", "크로아티아", Assigned, ["EUR"], ["hrv"], ["+385"], "CRO"),
    country!("HT", "HTI", "Haiti", "아이티", Assigned, ["HTG", "USD"], ["fra", "hat"], ["+509"], "HAI"),
    country!("HU", "HUN", "Hungary", "헝가리", Assigned, ["HUF"], ["hun"], ["+36"], "HUN"),
    country!("IC", "", "Canary Islands", "카나리아 제도", ExceptionallyReserved, ["EUR"], ["spa"], [], ""),
    country!("ID", "IDN", "Indonesia", "인도네시아", Assigned, ["IDR"], ["ind"], ["+62"], "INA"),
    country!("IE", "IRL", "Ireland", "아일랜드", Assigned, ["EUR"], ["eng", "gle"], ["+353"], "IRL"),
    country!("IL", "ISR", "Israel", "이스라엘", Assigned, ["ILS"], ["heb", "ara"], ["+972"], "ISR"),
    country!("IM", "IMN", "Isle Of Man", "맨섬", Assigned, ["GBP"], ["eng", "glv"], ["+44"], ""),
    country!("IN", "IND", "India", "인도", Assigned, ["INR"], ["hin", "eng"], ["+91"], "IND"),
    country!("IO", "IOT", "British Indian Ocean Territory", "영국령 인도양 지역", Assigned, ["USD"], ["eng"], ["+246"], ""),
    country!("IQ", "IRQ", "Iraq", "이라크", Assigned, ["IQD"], ["ara", "kur"], ["+964"], "IRQ"),
    country!("IR", "IRN", "Iran, Islamic Republic Of", "이란", Assigned, ["IRR"], ["fas"], ["+98"], "IRI"),
    country!("IS", "ISL", "Iceland", "아이슬란드", Assigned, ["ISK"], ["isl"], ["+354"], "ISL"),
    country!("IT", "ITA", "Italy", "이탈리아", Assigned, ["EUR"], ["ita"], ["+39"], "ITA"),
    country!("JE", "JEY", "Jersey", "저지섬", Assigned, ["GBP"], ["eng", "fra"], ["+44"], ""),
    country!("JM", "JAM", "Jamaica", "자메이카", Assigned, ["JMD"], ["eng"], ["+1 876"], "JAM"),
    country!("JO", "JOR", "Jordan", "요르단", Assigned, ["JOD"], ["ara"], ["+962"], "JOR"),
    country!("JP", "JPN", "Japan", "일본", Assigned, ["JPY"], ["jpn"], ["+81"], "JPN"),
    country!("KE", "KEN", "Kenya", "케냐", Assigned, ["KES"], ["eng", "swa"], ["+254"], "KEN"),
    country!("KG", "KGZ", "Kyrgyzstan", "키르기스스탄", Assigned, ["KGS"], ["kir", "rus"], ["+996"], "KGZ"),
    country!("KH", "KHM", "Cambodia", "캄보디아", Assigned, ["KHR"], ["khm"], ["+855"], "CAM"),
    country!("KI", "KIR", "Kiribati", "키리바시", Assigned, ["AUD"], ["eng", "gil"], ["+686"], "KIR"),
    country!("KM", "COM", "Comoros", "코모로", Assigned, ["KMF"], ["ara", "fra"], ["+269"], "COM"),
    country!("KN", "KNA", "Saint Kitts And Nevis", "세인트키츠 네비스", Assigned, ["XCD"], ["eng"], ["+1 869"], "SKN"),
    country!("KP", "PRK", "Korea, Democratic People's Republic Of", "조선민주주의인민공화국", Assigned, ["KPW"], ["kor"], ["+850"], "PRK"),
    country!("KR", "KOR", "Korea, Republic Of", "대한민국", Assigned, ["KRW"], ["kor"], ["+82"], "KOR"),
    country!("KW", "KWT", "Kuwait", "쿠웨이트", Assigned, ["KWD"], ["ara"], ["+965"], "KUW"),
    country!("KY", "CYM", "Cayman Islands", "케이맨 제도", Assigned, ["KYD"], ["eng"], ["+1 345"], "CAY"),
    country!("KZ", "KAZ", "Kazakhstan", "카자흐스탄", Assigned, ["KZT"], ["kaz", "rus"], ["+7"], "KAZ"),
    country!("LA", "LAO", "Lao People's Democratic Republic", "라오스", Assigned, ["LAK"], ["lao"], ["+856"], "LAO"),
    country!("LB", "LBN", "Lebanon", "레바논", Assigned, ["LBP"], ["ara"], ["+961"], "LIB"),
    country!("LC", "LCA", "Saint Lucia", "세인트루시아", Assigned, ["XCD"], ["eng"], ["+1 758"], "LCA"),
    country!("LI", "LIE", "Liechtenstein", "리히텐슈타인", Assigned, ["CHF"], ["deu"], ["+423"], "LIE"),
    country!("LK", "LKA", "Sri Lanka", "스리랑카", Assigned, ["LKR"], ["sin", "tam"], ["+94"], "SRI"),
    country!("LR", "LBR", "Liberia", "라이베리아", Assigned, ["LRD"], ["eng"], ["+231"], "LBR"),
    country!("LS", "LSO", "Lesotho", "레소토", Assigned, ["LSL", "ZAR"], ["eng", "sot"], ["+266"], "LES"),
    country!("LT", "LTU", "Lithuania", "리투아니아", Assigned, ["EUR"], ["lit"], ["+370"], "LTU"),
    country!("LU", "LUX", "Luxembourg", "룩셈부르크", Assigned, ["EUR"], ["fra", "deu", "ltz"], ["+352"], "LUX"),
    country!("LV", "LVA", "Latvia", "라트비아", Assigned, ["EUR"], ["lav"], ["+371"], "LAT"),
    country!("LY", "LBY", "Libya", "리비아", Assigned, ["LYD"], ["ara"], ["+218"], "LBA"),
    country!("MA", "MAR", "Morocco", "모로코", Assigned, ["MAD"], ["ara"], ["+212"], "MAR"),
    country!("MC", "MCO", "Monaco", "모나코", Assigned, ["EUR"], ["fra"], ["+377"], "MON"),
    country!("MD", "MDA", "Moldova", "몰도바", Assigned, ["MDL"], ["ron"], ["+373"], "MDA"),
    country!("ME", "MNE", "Montenegro", "몬테네그로", Assigned, ["EUR"], ["srp"], ["+382"], "MNE"),
    country!("MF", "MAF", "Saint Martin", "생마르탱", Assigned, ["EUR"], ["fra"], ["+590"], ""),
    country!("MG", "MDG", "Madagascar", "마다가스카르", Assigned, ["MGA"], ["mlg", "fra"], ["+261"], "MAD"),
    country!("MH", "MHL", "Marshall Islands", "마셜 제도", Assigned, ["USD"], ["eng", "mah"], ["+692"], "MHL"),
    country!("MK", "MKD", "North Macedonia", "북마케도니아", Assigned, ["MKD"], ["mkd"], ["+389"], "MKD"),
    country!("ML", "MLI", "Mali", "말리", Assigned, ["XOF"], ["fra", "bam"], ["+223"], "MLI"),
    country!("MM", "MMR", "Myanmar", "미얀마", Assigned, ["MMK"], ["mya"], ["+95"], "MYA"),
    country!("MN", "MNG", "Mongolia", "몽골", Assigned, ["MNT"], ["mon"], ["+976"], "MGL"),
    country!("MO", "MAC", "Macao", "마카오", Assigned, ["MOP"], ["zho", "por"], ["+853"], ""),
    country!("MP", "MNP", "Northern Mariana Islands", "북마리아나 제도", Assigned, ["USD"], ["eng", "cha"], ["+1 670"], ""),
    country!("MQ", "MTQ", "Martinique", "마르티니크", Assigned, ["EUR"], ["fra"], ["+596"], ""),
    country!("MR", "MRT", "Mauritania", "모리타니", Assigned, ["MRU"], ["ara", "fra"], ["+222"], "MTN"),
    country!("MS", "MSR", "Montserrat", "몬트세랫", Assigned, ["XCD"], ["eng"], ["+1 664"], ""),
    country!("MT", "MLT", "Malta", "몰타", Assigned, ["EUR"], ["mlt", "eng"], ["+356"], "MLT"),
    country!("MU", "MUS", "Mauritius", "모리셔스", Assigned, ["MUR"], ["eng", "fra"], ["+230"], "MRI"),
    country!("MV", "MDV", "Maldives", "몰디브", Assigned, ["MVR"], ["div"], ["+960"], "MDV"),
    country!("MW", "MWI", "Malawi", "말라위", Assigned, ["MWK"], ["eng", "nya"], ["+265"], "MAW"),
    country!("MX", "MEX", "Mexico", "멕시코", Assigned, ["MXN", "MXV"], ["spa"], ["+52"], "MEX"),
    country!("MY", "MYS", "Malaysia", "말레이시아", Assigned, ["MYR"], ["msa", "eng"], ["+60"], "MAS"),
    country!("MZ", "MOZ", "Mozambique", "모잠비크", Assigned, ["MZN"], ["por"], ["+258"], "MOZ"),
    country!("NA", "NAM", "Namibia", "나미비아", Assigned, ["NAD", "ZAR"], ["eng", "afr", "her", "kua", "ndo"], ["+264"], "NAM"),
    country!("NC", "NCL", "New Caledonia", "누벨칼레도니", Assigned, ["XPF"], ["fra"], ["+687"], ""),
    country!("NE", "NER", "Niger", "니제르", Assigned, ["XOF"], ["fra", "hau"], ["+227"], "NIG"),
    country!("NF", "NFK", "Norfolk Island", "노퍽섬", Assigned, ["AUD"], ["eng"], ["+672"], ""),
    country!("NG", "NGA", "Nigeria", "나이지리아", Assigned, ["NGN"], ["eng", "hau", "ibo", "yor"], ["+234"], "NGR"),
    country!("NI", "NIC", "Nicaragua", "니카라과", Assigned, ["NIO"], ["spa"], ["+505"], "NCA"),
    country!("NL", "NLD", "Netherlands", "네덜란드", Assigned, ["EUR"], ["nld"], ["+31"], "NED"),
    country!("NO", "NOR", "Norway", "노르웨이", Assigned, ["NOK"], ["nor", "nob", "nno"], ["+47"], "NOR"),
    country!("NP", "NPL", "Nepal", "네팔", Assigned, ["NPR"], ["nep"], ["+977"], "NEP"),
    country!("NR", "NRU", "Nauru", "나우루", Assigned, ["AUD"], ["nau", "eng"], ["+674"], "NRU"),
    country!("NT", "NTZ", "Neutral Zone", "중립 지대", Deleted, [], [], [], ""),
    country!("NU", "NIU", "Niue", "니우에", Assigned, ["NZD"], ["niu", "eng"], ["+683"], ""),
    country!("NZ", "NZL", "New Zealand", "뉴질랜드", Assigned, ["NZD"], ["eng", "mri"], ["+64"], "NZL"),
    country!("OM", "OMN", "Oman", "오만", Assigned, ["OMR"], ["ara"], ["+968"], "OMA"),
    country!("PA", "PAN", "Panama", "파나마", Assigned, ["PAB", "USD"], ["spa"], ["+507"], "PAN"),
    country!("PE", "PER", "Peru", "페루", Assigned, ["PEN"], ["spa", "que", "aym"], ["+51"], "PER"),
    country!("PF", "PYF", "French Polynesia", "프랑스령 폴리네시아", Assigned, ["XPF"], ["fra", "tah"], ["+689"], ""),
    country!("PG", "PNG", "Papua New Guinea", "파푸아뉴기니", Assigned, ["PGK"], ["eng", "tpi", "hmo"], ["+675"], "PNG"),
    country!("PH", "PHL", "Philippines", "필리핀", Assigned, ["PHP"], ["eng", "fil"], ["+63"], "PHI"),
    country!("PK", "PAK", "Pakistan", "파키스탄", Assigned, ["PKR"], ["urd", "eng"], ["+92"], "PAK"),
    country!("PL", "POL", "Poland", "폴란드", Assigned, ["PLN"], ["pol"], ["+48"], "POL"),
    country!("PM", "SPM", "Saint Pierre And Miquelon", "생피에르 미클롱", Assigned, ["EUR"], ["fra"], ["+508"], ""),
    country!("PN", "PCN", "Pitcairn", "핏케언 제도", Assigned, ["NZD"], ["eng"], ["+872"], ""),
    country!("PR", "PRI", "Puerto Rico", "푸에르토리코", Assigned, ["USD"], ["spa", "eng"], ["+1 787", "+1 939"], "PUR"),
    country!("PS", "PSE", "Palestine, State Of", "팔레스타인", Assigned, ["ILS", "JOD"], ["ara"], ["+970"], "PLE"),
    country!("PT", "PRT", "Portugal", "포르투갈", Assigned, ["EUR"], ["por"], ["+351"], "POR"),
    country!("PW", "PLW", "Palau", "팔라우", Assigned, ["USD"], ["eng", "pau"], ["+680"], "PLW"),
    country!("PY", "PRY", "Paraguay", "파라과이", Assigned, ["PYG"], ["spa", "grn"], ["+595"], "PAR"),
    country!("QA", "QAT", "Qatar", "카타르", Assigned, ["QAR"], ["ara"], ["+974"], "QAT"),
    country!("RE", "REU", "Reunion", "레위니옹", Assigned, ["EUR"], ["fra"], ["+262"], ""),
    country!("RO", "ROU", "Romania", "루마니아", Assigned, ["RON"], ["ron"], ["+40"], "ROU"),
    country!("RS", "SRB", "Serbia", "세르비아", Assigned, ["RSD"], ["srp"], ["+381"], "SRB"),
    country!("RU", "RUS", "Russian Federation", "러시아", Assigned, ["RUB"], ["rus"], ["+7"], "RUS"),
    country!("RW", "RWA", "Rwanda", "르완다", Assigned, ["RWF"], ["kin", "eng", "fra", "swa"], ["+250"], "RWA"),
    country!("SA", "SAU", "Saudi Arabia", "사우디아라비아", Assigned, ["SAR"], ["ara"], ["+966"], "KSA"),
    country!("SB", "SLB", "Solomon Islands", "솔로몬 제도", Assigned, ["SBD"], ["eng"], ["+677"], "SOL"),
    country!("SC", "SYC", "Seychelles", "세이셸", Assigned, ["SCR"], ["eng", "fra"], ["+248"], "SEY"),
    country!("SD", "SDN", "Sudan", "수단", Assigned, ["SDG"], ["ara", "eng"], ["+249"], "SUD"),
    country!("SE", "SWE", "Sweden", "스웨덴", Assigned, ["SEK"], ["swe"], ["+46"], "SWE"),
    country!("SG", "SGP", "Singapore", "싱가포르", Assigned, ["SGD"], ["eng", "msa", "zho", "tam"], ["+65"], "SGP"),
    country!("SH", "SHN", "Saint Helena, Ascension And Tristan Da Cunha", "세인트헬레나 어센션 트리스탄다쿠냐", Assigned, ["SHP"], ["eng"], ["+290"], ""),
    country!("SI", "SVN", "Slovenia", "슬로베니아", Assigned, ["EUR"], ["slv"], ["+386"], "SLO"),
    country!("SJ", "SJM", "Svalbard And Jan Mayen", "스발바르 얀마옌", Assigned, ["NOK"], ["nor"], ["+47"], ""),
    country!("SK", "SKM", "Sikkim", "시킴", Deleted, ["INR"], [], [], ""),
    country!("SK", "SVK", "Slovakia", "슬로바키아", Assigned, ["EUR"], ["slk"], ["+421"], "SVK"),
    country!("SL", "SLE", "Sierra Leone", "시에라리온", Assigned, ["SLE"], ["eng"], ["+232"], "SLE"),
    country!("SM", "SMR", "San Marino", "산마리노", Assigned, ["EUR"], ["ita"], ["+378"], "SMR"),
    country!("SN", "SEN", "Senegal", "세네갈", Assigned, ["XOF"], ["fra", "wol"], ["+221"], "SEN"),
    country!("SO", "SOM", "Somalia", "소말리아", Assigned, ["SOS"], ["som", "ara"], ["+252"], "SOM"),
    country!("SR", "SUR", "Suriname", "수리남", Assigned, ["SRD"], ["nld"], ["+597"], "SUR"),
    country!("SS", "SSD", "South Sudan", "남수단", Assigned, ["SSP"], ["eng"], ["+211"], "SSD"),
    country!("ST", "STP", "Sao Tome and Principe", "상투메 프린시페", Assigned, ["STN"], ["por"], ["+239"], "STP"),
    country!("SU", "SUN", "USSR", "소비에트 사회주의 공화국 연방", ExceptionallyReserved, ["RUB"], ["rus"], [], "URS"),
    country!("SV", "SLV", "El Salvador", "엘살바도르", Assigned, ["USD"], ["spa"], ["+503"], "ESA"),
    country!("SX", "SXM", "Sint Maarten", "신트마르턴", Assigned, ["XCG"], ["nld", "eng"], ["+1 721"], ""),
    country!("SY", "SYR", "Syrian Arab Republic", "시리아", Assigned, ["SYP"], ["ara"], ["+963"], "SYR"),
    country!("SZ", "SWZ", "Eswatini", "에스와티니", Assigned, ["SZL"], ["eng", "ssw"], ["+268"], "SWZ"),
    country!("TA", "TAA", "Tristan de Cunha", "트리스탄다쿠냐", ExceptionallyReserved, ["GBP"], ["eng"], ["+290"], ""),
    country!("TC", "TCA", "Turks And Caicos Islands", "터크스 케이커스 제도", Assigned, ["USD"], ["eng"], ["+1 649"], ""),
    country!("TD", "TCD", "Chad", "차드", Assigned, ["XAF"], ["ara", "fra"], ["+235"], "CHA"),
    country!("TF", "ATF", "French Southern Territories", "프랑스령 남방 및 남극 지역", Assigned, ["EUR"], ["fra"], [], ""),
    country!("TG", "TGO", "Togo", "토고", Assigned, ["XOF"], ["fra"], ["+228"], "TOG"),
    country!("TH", "THA", "Thailand", "태국", Assigned, ["THB"], ["tha"], ["+66"], "THA"),
    country!("TJ", "TJK", "Tajikistan", "타지키스탄", Assigned, ["TJS"], ["tgk", "rus"], ["+992"], "TJK"),
    country!("TK", "TKL", "Tokelau", "토켈라우", Assigned, ["NZD"], ["eng", "tkl"], ["+690"], ""),
    country!("TL", "TLS", "Timor-Leste", "동티모르", Assigned, ["USD"], ["por", "tet"], ["+670"], "TLS"),
    country!("TM", "TKM", "Turkmenistan", "투르크메니스탄", Assigned, ["TMT"], ["tuk", "rus"], ["+993"], "TKM"),
    country!("TN", "TUN", "Tunisia", "튀니지", Assigned, ["TND"], ["ara"], ["+216"], "TUN"),
    country!("TO", "TON", "Tonga", "통가", Assigned, ["TOP"], ["eng", "ton"], ["+676"], "TGA"),
    country!("TP", "TMP", "East Timor", "동티모르", TransitionallyReserved, ["USD"], ["por", "tet"], ["+670"], ""),
    country!("TR", "TUR", "Turkey", "튀르키예", Assigned, ["TRY"], ["tur"], ["+90"], "TUR"),
    country!("TT", "TTO", "Trinidad And Tobago", "트리니다드 토바고", Assigned, ["TTD"], ["eng"], ["+1 868"], "TTO"),
    country!("TV", "TUV", "Tuvalu", "투발루", Assigned, ["AUD"], ["eng", "tvl"], ["+688"], "TUV"),
    country!("TW", "TWN", "Taiwan", "대만", Assigned, ["TWD"], ["zho"], ["+886"], "TPE"),
    country!("TZ", "TZA", "Tanzania, United Republic Of", "탄자니아", Assigned, ["TZS"], ["swa", "eng"], ["+255"], "TAN"),
    country!("UA", "UKR", "Ukraine", "우크라이나", Assigned, ["UAH"], ["ukr"], ["+380"], "UKR"),
    country!("UG", "UGA", "Uganda", "우간다", Assigned, ["UGX"], ["eng", "swa"], ["+256"], "UGA"),
    country!("UK", "", "United Kingdom", "영국", ExceptionallyReserved, ["GBP"], ["eng"], ["+44"], ""),
    country!("UM", "UMI", "United States Minor Outlying Islands", "미국령 군소 제도", Assigned, ["USD"], ["eng"], ["+1"], ""),
    country!("US", "USA", "United States", "미국", Assigned, ["USD", "USN"], ["eng"], ["+1"], "USA"),
    country!("UY", "URY", "Uruguay", "우루과이", Assigned, ["UYU", "UYI"], ["spa"], ["+598"], "URU"),
    country!("UZ", "UZB", "Uzbekistan", "우즈베키스탄", Assigned, ["UZS"], ["uzb", "rus"], ["+998"], "UZB"),
    country!("VA", "VAT", "Vatican City State", "바티칸 시국", Assigned, ["EUR"], ["ita", "lat"], ["+379", "+39"], ""),
    country!("VC", "VCT", "Saint Vincent And The Grenadines", "세인트빈센트 그레나딘", Assigned, ["XCD"], ["eng"], ["+1 784"], "VIN"),
    country!("VE", "VEN", "Venezuela, Bolivarian Republic Of", "베네수엘라", Assigned, ["VES", "VED"], ["spa"], ["+58"], "VEN"),
    country!("VG", "VGB", "Virgin Islands (British)", "영국령 버진아일랜드", Assigned, ["USD"], ["eng"], ["+1 284"], "IVB"),
    country!("VI", "VIR", "Virgin Islands (US)", "미국령 버진아일랜드", Assigned, ["USD"], ["eng"], ["+1 340"], "ISV"),
    country!("VN", "VNM", "Viet Nam", "베트남", Assigned, ["VND"], ["vie"], ["+84"], "VIE"),
    country!("VU", "VUT", "Vanuatu", "바누아투", Assigned, ["VUV"], ["bis", "eng", "fra"], ["+678"], "VAN"),
    country!("WF", "WLF", "Wallis And Futuna", "왈리스 푸투나", Assigned, ["XPF"], ["fra"], ["+681"], ""),
    country!("WS", "WSM", "Samoa", "사모아", Assigned, ["WST"], ["smo", "eng"], ["+685"], "SAM"),
    country!("XK", "XKX", "Kosovo", "코소보", UserAssigned, ["EUR"], ["sqi", "srp"], ["+383"], "KOS"),
    country!("YE", "YEM", "Yemen", "예멘", Assigned, ["YER"], ["ara"], ["+967"], "YEM"),
    country!("YT", "MYT", "Mayotte", "마요트", Assigned, ["EUR"], ["fra"], ["+262"], ""),
    country!("YU", "YUG", "Yugoslavia", "유고슬라비아", TransitionallyReserved, [], ["srp", "hrv", "slv", "mkd"], [], "YUG"),
    country!("ZA", "ZAF", "South Africa", "남아프리카 공화국", Assigned, ["ZAR"], ["afr", "eng", "nbl", "sot", "ssw", "tsn", "tso", "ven", "xho", "zul"], ["+27"], "RSA"),
    country!("ZM", "ZMB", "Zambia", "잠비아", Assigned, ["ZMW"], ["eng"], ["+260"], "ZAM"),
    country!("ZR", "ZAR", "Zaire", "자이르", TransitionallyReserved, [], ["fra", "lin"], [], "ZAI"),
    country!("ZW", "ZWE", "Zimbabwe", "짐바브웨", Assigned, ["ZWG", "USD"], ["eng", "sna", "nde"], ["+263"], "ZIM"),
];
