//! Fixed country reference catalogue.
//!
//! The UN member states (plus Antarctica, kept for the adventurous), with
//! short display names and continent assignments. A handful of entries carry
//! special-cased continents that differ from the usual geographic tables:
//! Timor-Leste and the Vatican are pinned to Asia and Europe respectively,
//! and Turkey is listed under Europe.
//!
//! The resolver and layout engine never consult this module; they treat
//! country codes as opaque keys. The catalogue exists so callers (the CLI,
//! a UI) have a ready-made collaborator for names and continent filtering.

use crate::model::{Continent, CountryCode, CountryInfo};

use Continent::{Africa, Antarctica, Asia, Europe, NorthAmerica, Oceania, SouthAmerica};

/// `(alpha-2, short name, continent)` rows, sorted by code.
const COUNTRIES: &[(&str, &str, Continent)] = &[
    ("AD", "Andorra", Europe),
    ("AE", "United Arab Emirates", Asia),
    ("AF", "Afghanistan", Asia),
    ("AG", "Antigua and Barbuda", NorthAmerica),
    ("AL", "Albania", Europe),
    ("AM", "Armenia", Asia),
    ("AO", "Angola", Africa),
    ("AQ", "Antarctica", Antarctica),
    ("AR", "Argentina", SouthAmerica),
    ("AT", "Austria", Europe),
    ("AU", "Australia", Oceania),
    ("AZ", "Azerbaijan", Asia),
    ("BA", "Bosnia and Herzegovina", Europe),
    ("BB", "Barbados", NorthAmerica),
    ("BD", "Bangladesh", Asia),
    ("BE", "Belgium", Europe),
    ("BF", "Burkina Faso", Africa),
    ("BG", "Bulgaria", Europe),
    ("BH", "Bahrain", Asia),
    ("BI", "Burundi", Africa),
    ("BJ", "Benin", Africa),
    ("BN", "Brunei", Asia),
    ("BO", "Bolivia", SouthAmerica),
    ("BR", "Brazil", SouthAmerica),
    ("BS", "Bahamas", NorthAmerica),
    ("BT", "Bhutan", Asia),
    ("BW", "Botswana", Africa),
    ("BY", "Belarus", Europe),
    ("BZ", "Belize", NorthAmerica),
    ("CA", "Canada", NorthAmerica),
    ("CD", "DR Congo", Africa),
    ("CF", "Central African Republic", Africa),
    ("CG", "Congo Republic", Africa),
    ("CH", "Switzerland", Europe),
    ("CI", "Cote d'Ivoire", Africa),
    ("CL", "Chile", SouthAmerica),
    ("CM", "Cameroon", Africa),
    ("CN", "China", Asia),
    ("CO", "Colombia", SouthAmerica),
    ("CR", "Costa Rica", NorthAmerica),
    ("CU", "Cuba", NorthAmerica),
    ("CV", "Cabo Verde", Africa),
    ("CY", "Cyprus", Asia),
    ("CZ", "Czechia", Europe),
    ("DE", "Germany", Europe),
    ("DJ", "Djibouti", Africa),
    ("DK", "Denmark", Europe),
    ("DM", "Dominica", NorthAmerica),
    ("DO", "Dominican Republic", NorthAmerica),
    ("DZ", "Algeria", Africa),
    ("EC", "Ecuador", SouthAmerica),
    ("EE", "Estonia", Europe),
    ("EG", "Egypt", Africa),
    ("ER", "Eritrea", Africa),
    ("ES", "Spain", Europe),
    ("ET", "Ethiopia", Africa),
    ("FI", "Finland", Europe),
    ("FJ", "Fiji", Oceania),
    ("FM", "Micronesia", Oceania),
    ("FR", "France", Europe),
    ("GA", "Gabon", Africa),
    ("GB", "United Kingdom", Europe),
    ("GD", "Grenada", NorthAmerica),
    ("GE", "Georgia", Asia),
    ("GH", "Ghana", Africa),
    ("GM", "Gambia", Africa),
    ("GN", "Guinea", Africa),
    ("GQ", "Equatorial Guinea", Africa),
    ("GR", "Greece", Europe),
    ("GT", "Guatemala", NorthAmerica),
    ("GW", "Guinea-Bissau", Africa),
    ("GY", "Guyana", SouthAmerica),
    ("HN", "Honduras", NorthAmerica),
    ("HR", "Croatia", Europe),
    ("HT", "Haiti", NorthAmerica),
    ("HU", "Hungary", Europe),
    ("ID", "Indonesia", Asia),
    ("IE", "Ireland", Europe),
    ("IL", "Israel", Asia),
    ("IN", "India", Asia),
    ("IQ", "Iraq", Asia),
    ("IR", "Iran", Asia),
    ("IS", "Iceland", Europe),
    ("IT", "Italy", Europe),
    ("JM", "Jamaica", NorthAmerica),
    ("JO", "Jordan", Asia),
    ("JP", "Japan", Asia),
    ("KE", "Kenya", Africa),
    ("KG", "Kyrgyzstan", Asia),
    ("KH", "Cambodia", Asia),
    ("KI", "Kiribati", Oceania),
    ("KM", "Comoros", Africa),
    ("KN", "St. Kitts and Nevis", NorthAmerica),
    ("KP", "North Korea", Asia),
    ("KR", "South Korea", Asia),
    ("KW", "Kuwait", Asia),
    ("KZ", "Kazakhstan", Asia),
    ("LA", "Laos", Asia),
    ("LB", "Lebanon", Asia),
    ("LC", "St. Lucia", NorthAmerica),
    ("LI", "Liechtenstein", Europe),
    ("LK", "Sri Lanka", Asia),
    ("LR", "Liberia", Africa),
    ("LS", "Lesotho", Africa),
    ("LT", "Lithuania", Europe),
    ("LU", "Luxembourg", Europe),
    ("LV", "Latvia", Europe),
    ("LY", "Libya", Africa),
    ("MA", "Morocco", Africa),
    ("MC", "Monaco", Europe),
    ("MD", "Moldova", Europe),
    ("ME", "Montenegro", Europe),
    ("MG", "Madagascar", Africa),
    ("MH", "Marshall Islands", Oceania),
    ("MK", "North Macedonia", Europe),
    ("ML", "Mali", Africa),
    ("MM", "Myanmar", Asia),
    ("MN", "Mongolia", Asia),
    ("MR", "Mauritania", Africa),
    ("MT", "Malta", Europe),
    ("MU", "Mauritius", Africa),
    ("MV", "Maldives", Asia),
    ("MW", "Malawi", Africa),
    ("MX", "Mexico", NorthAmerica),
    ("MY", "Malaysia", Asia),
    ("MZ", "Mozambique", Africa),
    ("NA", "Namibia", Africa),
    ("NE", "Niger", Africa),
    ("NG", "Nigeria", Africa),
    ("NI", "Nicaragua", NorthAmerica),
    ("NL", "Netherlands", Europe),
    ("NO", "Norway", Europe),
    ("NP", "Nepal", Asia),
    ("NR", "Nauru", Oceania),
    ("NZ", "New Zealand", Oceania),
    ("OM", "Oman", Asia),
    ("PA", "Panama", NorthAmerica),
    ("PE", "Peru", SouthAmerica),
    ("PG", "Papua New Guinea", Oceania),
    ("PH", "Philippines", Asia),
    ("PK", "Pakistan", Asia),
    ("PL", "Poland", Europe),
    ("PS", "Palestine", Asia),
    ("PT", "Portugal", Europe),
    ("PW", "Palau", Oceania),
    ("PY", "Paraguay", SouthAmerica),
    ("QA", "Qatar", Asia),
    ("RO", "Romania", Europe),
    ("RS", "Serbia", Europe),
    ("RU", "Russia", Europe),
    ("RW", "Rwanda", Africa),
    ("SA", "Saudi Arabia", Asia),
    ("SB", "Solomon Islands", Oceania),
    ("SC", "Seychelles", Africa),
    ("SD", "Sudan", Africa),
    ("SE", "Sweden", Europe),
    ("SG", "Singapore", Asia),
    ("SI", "Slovenia", Europe),
    ("SK", "Slovakia", Europe),
    ("SL", "Sierra Leone", Africa),
    ("SM", "San Marino", Europe),
    ("SN", "Senegal", Africa),
    ("SO", "Somalia", Africa),
    ("SR", "Suriname", SouthAmerica),
    ("SS", "South Sudan", Africa),
    ("ST", "Sao Tome and Principe", Africa),
    ("SV", "El Salvador", NorthAmerica),
    ("SY", "Syria", Asia),
    ("SZ", "Eswatini", Africa),
    ("TD", "Chad", Africa),
    ("TG", "Togo", Africa),
    ("TH", "Thailand", Asia),
    ("TJ", "Tajikistan", Asia),
    ("TL", "Timor-Leste", Asia),
    ("TM", "Turkmenistan", Asia),
    ("TN", "Tunisia", Africa),
    ("TO", "Tonga", Oceania),
    ("TR", "Turkey", Europe),
    ("TT", "Trinidad and Tobago", NorthAmerica),
    ("TW", "Taiwan", Asia),
    ("TZ", "Tanzania", Africa),
    ("UA", "Ukraine", Europe),
    ("UG", "Uganda", Africa),
    ("US", "United States", NorthAmerica),
    ("UY", "Uruguay", SouthAmerica),
    ("UZ", "Uzbekistan", Asia),
    ("VA", "Vatican", Europe),
    ("VC", "St. Vincent and the Grenadines", NorthAmerica),
    ("VE", "Venezuela", SouthAmerica),
    ("VN", "Vietnam", Asia),
    ("VU", "Vanuatu", Oceania),
    ("WS", "Samoa", Oceania),
    ("YE", "Yemen", Asia),
    ("ZA", "South Africa", Africa),
    ("ZM", "Zambia", Africa),
    ("ZW", "Zimbabwe", Africa),
];

/// All catalogue entries, in code order.
#[must_use]
pub fn all() -> Vec<CountryInfo> {
    COUNTRIES.iter().map(to_info).collect()
}

/// Look up a single entry by alpha-2 code (case-insensitive).
#[must_use]
pub fn find(code: &CountryCode) -> Option<CountryInfo> {
    COUNTRIES
        .binary_search_by(|(c, _, _)| (*c).cmp(code.as_str()))
        .ok()
        .map(|idx| to_info(&COUNTRIES[idx]))
}

/// Display name for a code, falling back to the code itself for entries the
/// catalogue does not know.
#[must_use]
pub fn display_name(code: &CountryCode) -> String {
    find(code).map_or_else(|| code.to_string(), |info| info.name)
}

/// Entries on a given continent, in code order.
#[must_use]
pub fn by_continent(continent: Continent) -> Vec<CountryInfo> {
    COUNTRIES
        .iter()
        .filter(|(_, _, c)| *c == continent)
        .map(to_info)
        .collect()
}

fn to_info(&(code, name, continent): &(&str, &str, Continent)) -> CountryInfo {
    CountryInfo {
        code: CountryCode::new(code),
        name: name.to_string(),
        continent,
    }
}
