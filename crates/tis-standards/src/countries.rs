//! Canonical country and territory names, plus the synonym table used by the
//! country normalizer.
//!
//! The canonical spellings are the ones the import templates accept; the
//! synonym table maps common free-text variants onto them.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

/// Canonical country/territory names accepted by `CountryEnum` fields.
pub const COUNTRIES: &[&str] = &[
    "Afghanistan",
    "Aland Islands",
    "Albania",
    "Algeria",
    "American Samoa",
    "Andorra",
    "Angola",
    "Anguilla",
    "Antarctica",
    "Antigua and Barbuda",
    "Argentina",
    "Armenia",
    "Aruba",
    "Australia",
    "Austria",
    "Azerbaijan",
    "Bahamas",
    "Bahrain",
    "Bangladesh",
    "Barbados",
    "Belarus",
    "Belgium",
    "Belize",
    "Benin",
    "Bermuda",
    "Bhutan",
    "Bolivia",
    "Bonaire, Saint Eustatius and Saba",
    "Bosnia and Herzegovina",
    "Botswana",
    "Bouvet Island",
    "Brazil",
    "British Indian Ocean Territory",
    "Brunei Darussalam",
    "Bulgaria",
    "Burkina Faso",
    "Burundi",
    "Cambodia",
    "Cameroon",
    "Canada",
    "Cape Verde",
    "Cayman Islands",
    "Central African Republic",
    "Chad",
    "Chile",
    "China",
    "Christmas Island",
    "Cocos (Keeling) Islands",
    "Colombia",
    "Comoros",
    "Congo, Democratic Republic of",
    "Congo, Republic of",
    "Cook Islands",
    "Costa Rica",
    "Cote d'Ivoire",
    "Croatia",
    "Cuba",
    "Curacao",
    "Cyprus",
    "Czech Republic",
    "Denmark",
    "Djibouti",
    "Dominica",
    "Dominican Republic",
    "Ecuador",
    "Egypt",
    "El Salvador",
    "Equatorial Guinea",
    "Eritrea",
    "Estonia",
    "Eswatini",
    "Ethiopia",
    "Falkland Islands (Malvinas)",
    "Faroe Islands",
    "Fiji",
    "Finland",
    "France",
    "French Guiana",
    "French Polynesia",
    "French Southern Territories",
    "Gabon",
    "Gambia",
    "Georgia",
    "Germany",
    "Ghana",
    "Gibraltar",
    "Greece",
    "Greenland",
    "Grenada",
    "Guadeloupe",
    "Guam",
    "Guatemala",
    "Guernsey",
    "Guinea",
    "Guinea-Bissau",
    "Guyana",
    "Haiti",
    "Heard Island and McDonald Islands",
    "Holy See (Vatican City State)",
    "Honduras",
    "Hong Kong",
    "Hungary",
    "Iceland",
    "India",
    "Indonesia",
    "Iran",
    "Iraq",
    "Ireland",
    "Isle of Man",
    "Israel",
    "Italy",
    "Jamaica",
    "Japan",
    "Jersey",
    "Jordan",
    "Kazakhstan",
    "Kenya",
    "Kiribati",
    "Korea, Democratic People's Republic of",
    "Korea, Republic of",
    "Kosovo",
    "Kuwait",
    "Kyrgyzstan",
    "Laos",
    "Latvia",
    "Lebanon",
    "Lesotho",
    "Liberia",
    "Libya",
    "Liechtenstein",
    "Lithuania",
    "Luxembourg",
    "Macau",
    "Madagascar",
    "Malawi",
    "Malaysia",
    "Maldives",
    "Mali",
    "Malta",
    "Marshall Islands",
    "Martinique",
    "Mauritania",
    "Mauritius",
    "Mayotte",
    "Mexico",
    "Micronesia, Federated States of",
    "Moldova, Republic of",
    "Monaco",
    "Mongolia",
    "Montenegro",
    "Montserrat",
    "Morocco",
    "Mozambique",
    "Myanmar",
    "Namibia",
    "Nauru",
    "Nepal",
    "Netherlands",
    "New Caledonia",
    "New Zealand",
    "Nicaragua",
    "Niger",
    "Nigeria",
    "Niue",
    "Norfolk Island",
    "North Macedonia",
    "Northern Mariana Islands",
    "Norway",
    "Oman",
    "Pakistan",
    "Palau",
    "Panama",
    "Papua New Guinea",
    "Paraguay",
    "Peru",
    "Philippines",
    "Pitcairn",
    "Poland",
    "Portugal",
    "Puerto Rico",
    "Qatar",
    "Reunion",
    "Romania",
    "Russian Federation",
    "Rwanda",
    "Saint Barthelemy",
    "Saint Helena",
    "Saint Kitts and Nevis",
    "Saint Lucia",
    "Saint Martin",
    "Saint Pierre and Miquelon",
    "Saint Vincent and the Grenadines",
    "Samoa",
    "San Marino",
    "Sao Tome and Principe",
    "Saudi Arabia",
    "Senegal",
    "Serbia",
    "Seychelles",
    "Sierra Leone",
    "Singapore",
    "Sint Maarten",
    "Slovakia",
    "Slovenia",
    "Solomon Islands",
    "Somalia",
    "South Africa",
    "South Georgia and the South Sandwich Islands",
    "South Sudan",
    "Spain",
    "Sri Lanka",
    "State of Palestine",
    "Sudan",
    "Suriname",
    "Svalbard and Jan Mayen",
    "Sweden",
    "Switzerland",
    "Syrian Arab Republic",
    "Taiwan",
    "Tajikistan",
    "Tanzania",
    "Thailand",
    "Timor-Leste",
    "Togo",
    "Tokelau",
    "Tonga",
    "Trinidad and Tobago",
    "Tunisia",
    "Turkey",
    "Turkmenistan",
    "Turks and Caicos Islands",
    "Tuvalu",
    "Uganda",
    "Ukraine",
    "United Arab Emirates",
    "United Kingdom",
    "United States",
    "United States Minor Outlying Islands",
    "Uruguay",
    "Uzbekistan",
    "Vanuatu",
    "Venezuela",
    "Vietnam",
    "Virgin Islands, British",
    "Virgin Islands, U.S.",
    "Wallis and Futuna",
    "Western Sahara",
    "Yemen",
    "Zambia",
    "Zimbabwe",
];

/// Free-text variants mapped to their canonical spelling.
pub const COUNTRY_SYNONYMS: &[(&str, &str)] = &[
    ("USA", "United States"),
    ("US", "United States"),
    ("U.S.", "United States"),
    ("U.S.A.", "United States"),
    ("United States of America", "United States"),
    ("America", "United States"),
    ("UK", "United Kingdom"),
    ("U.K.", "United Kingdom"),
    ("Great Britain", "United Kingdom"),
    ("Britain", "United Kingdom"),
    ("England", "United Kingdom"),
    ("UAE", "United Arab Emirates"),
    ("KSA", "Saudi Arabia"),
    ("Kingdom of Saudi Arabia", "Saudi Arabia"),
    ("Russia", "Russian Federation"),
    ("South Korea", "Korea, Republic of"),
    ("Republic of Korea", "Korea, Republic of"),
    ("North Korea", "Korea, Democratic People's Republic of"),
    ("Vatican", "Holy See (Vatican City State)"),
    ("Vatican City", "Holy See (Vatican City State)"),
    ("Czechia", "Czech Republic"),
    ("Ivory Coast", "Cote d'Ivoire"),
    ("Burma", "Myanmar"),
    ("Swaziland", "Eswatini"),
    ("Macedonia", "North Macedonia"),
    ("Moldova", "Moldova, Republic of"),
    ("Brunei", "Brunei Darussalam"),
    ("Syria", "Syrian Arab Republic"),
    ("Palestine", "State of Palestine"),
    ("DRC", "Congo, Democratic Republic of"),
    ("Democratic Republic of the Congo", "Congo, Democratic Republic of"),
    ("Republic of the Congo", "Congo, Republic of"),
    ("Congo", "Congo, Republic of"),
    ("East Timor", "Timor-Leste"),
    ("Cabo Verde", "Cape Verde"),
    ("The Netherlands", "Netherlands"),
    ("Holland", "Netherlands"),
    ("Turkiye", "Turkey"),
    ("Viet Nam", "Vietnam"),
    ("Lao People's Democratic Republic", "Laos"),
    ("The Gambia", "Gambia"),
    ("The Bahamas", "Bahamas"),
];

static COUNTRY_SET: LazyLock<BTreeSet<&'static str>> =
    LazyLock::new(|| COUNTRIES.iter().copied().collect());

static SYNONYM_MAP: LazyLock<BTreeMap<&'static str, &'static str>> =
    LazyLock::new(|| COUNTRY_SYNONYMS.iter().copied().collect());

/// Exact-match membership in the canonical country list.
pub fn is_canonical_country(value: &str) -> bool {
    COUNTRY_SET.contains(value)
}

/// Canonical spelling for a free-text variant, if one is known.
pub fn canonical_country(value: &str) -> Option<&'static str> {
    SYNONYM_MAP.get(value).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_is_exact() {
        assert!(is_canonical_country("Canada"));
        assert!(!is_canonical_country("Canadaa"));
        assert!(!is_canonical_country("canada"));
    }

    #[test]
    fn synonyms_resolve_to_canonical_names() {
        for (variant, canonical) in COUNTRY_SYNONYMS {
            assert!(
                is_canonical_country(canonical),
                "synonym target {canonical} for {variant} is not canonical"
            );
        }
        assert_eq!(canonical_country("USA"), Some("United States"));
        assert_eq!(canonical_country("United States"), None);
    }

    #[test]
    fn list_is_sorted_and_unique() {
        let mut sorted = COUNTRIES.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted, COUNTRIES);
    }
}
