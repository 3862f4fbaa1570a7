//! SSA state codes for beneficiary and provider state fields.

/// Returned for states that have no SSA code.
pub const UNKNOWN_STATE_CODE: &str = "NONE";

/// (name, USPS abbreviation, SSA state code)
const STATES: &[(&str, &str, &str)] = &[
    ("Alabama", "AL", "01"),
    ("Alaska", "AK", "02"),
    ("Arizona", "AZ", "03"),
    ("Arkansas", "AR", "04"),
    ("California", "CA", "05"),
    ("Colorado", "CO", "06"),
    ("Connecticut", "CT", "07"),
    ("Delaware", "DE", "08"),
    ("District of Columbia", "DC", "09"),
    ("Florida", "FL", "10"),
    ("Georgia", "GA", "11"),
    ("Hawaii", "HI", "12"),
    ("Idaho", "ID", "13"),
    ("Illinois", "IL", "14"),
    ("Indiana", "IN", "15"),
    ("Iowa", "IA", "16"),
    ("Kansas", "KS", "17"),
    ("Kentucky", "KY", "18"),
    ("Louisiana", "LA", "19"),
    ("Maine", "ME", "20"),
    ("Maryland", "MD", "21"),
    ("Massachusetts", "MA", "22"),
    ("Michigan", "MI", "23"),
    ("Minnesota", "MN", "24"),
    ("Mississippi", "MS", "25"),
    ("Missouri", "MO", "26"),
    ("Montana", "MT", "27"),
    ("Nebraska", "NE", "28"),
    ("Nevada", "NV", "29"),
    ("New Hampshire", "NH", "30"),
    ("New Jersey", "NJ", "31"),
    ("New Mexico", "NM", "32"),
    ("New York", "NY", "33"),
    ("North Carolina", "NC", "34"),
    ("North Dakota", "ND", "35"),
    ("Ohio", "OH", "36"),
    ("Oklahoma", "OK", "37"),
    ("Oregon", "OR", "38"),
    ("Pennsylvania", "PA", "39"),
    ("Puerto Rico", "PR", "40"),
    ("Rhode Island", "RI", "41"),
    ("South Carolina", "SC", "42"),
    ("South Dakota", "SD", "43"),
    ("Tennessee", "TN", "44"),
    ("Texas", "TX", "45"),
    ("Utah", "UT", "46"),
    ("Vermont", "VT", "47"),
    ("Virgin Islands", "VI", "48"),
    ("Virginia", "VA", "49"),
    ("Washington", "WA", "50"),
    ("West Virginia", "WV", "51"),
    ("Wisconsin", "WI", "52"),
    ("Wyoming", "WY", "53"),
    ("American Samoa", "AS", "64"),
    ("Guam", "GU", "65"),
    ("Northern Mariana Islands", "MP", "66"),
];

/// Two-digit SSA state code for a state name or abbreviation
/// (case-insensitive), or [`UNKNOWN_STATE_CODE`].
pub fn state_code(state: &str) -> &'static str {
    let state = state.trim();
    STATES
        .iter()
        .find(|(name, abbrev, _)| {
            name.eq_ignore_ascii_case(state) || abbrev.eq_ignore_ascii_case(state)
        })
        .map_or(UNKNOWN_STATE_CODE, |(_, _, code)| *code)
}
