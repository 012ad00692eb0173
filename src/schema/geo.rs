//! Static geography tables — state names, region names, and the set of
//! regions that ran the season in the remote format.
//!
//! All tables are process-wide constants. The event feed carries postal
//! abbreviations and FIRST region codes; the narrator wants the spoken
//! forms.

/// US state and territory postal codes mapped to their full names.
pub const US_STATES: &[(&str, &str)] = &[
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AZ", "Arizona"),
    ("AR", "Arkansas"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DE", "Delaware"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("HI", "Hawaii"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("IA", "Iowa"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("ME", "Maine"),
    ("MD", "Maryland"),
    ("MA", "Massachusetts"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MS", "Mississippi"),
    ("MO", "Missouri"),
    ("MT", "Montana"),
    ("NE", "Nebraska"),
    ("NV", "Nevada"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NY", "New York"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VT", "Vermont"),
    ("VA", "Virginia"),
    ("WA", "Washington"),
    ("WV", "West Virginia"),
    ("WI", "Wisconsin"),
    ("WY", "Wyoming"),
    ("DC", "District of Columbia"),
    ("AS", "American Samoa"),
    ("GU", "Guam"),
    ("MP", "Northern Mariana Islands"),
    ("PR", "Puerto Rico"),
    ("UM", "United States Minor Outlying Islands"),
    ("VI", "U.S. Virgin Islands"),
];

/// FIRST region codes mapped to their spoken region names.
pub const REGION_NAMES: &[(&str, &str)] = &[
    ("USCHS", "Chesapeake"),
    ("USNYNY", "New York City"),
    ("USNYEX", "Excelsior"),
    ("USNYLI", "Long Island"),
    ("USTXCE", "Central Texas"),
    ("USTXHO", "Houston"),
    ("USTXNO", "Northern Texas"),
    ("USTXSO", "Southern Texas"),
    ("USTXWP", "Texas Panhandle"),
    ("USCANO", "Norcal"),
    ("USCALA", "Socal"),
    ("USCASD", "San Diego"),
];

/// Regions whose events ran in the remote format this season: qualification
/// scores only, no alliance selection and no elimination bracket.
pub const REMOTE_FORMAT_REGIONS: &[&str] = &[
    "USNYNY", "USNYEX", "USNYLI", "USCANO", "USCALA", "USCASD",
];

/// Full state name for a postal code, if known.
pub fn state_name(code: &str) -> Option<&'static str> {
    US_STATES
        .iter()
        .find(|(abbrev, _)| *abbrev == code)
        .map(|(_, name)| *name)
}

/// Spoken region name for a FIRST region code, if known.
pub fn region_name(code: &str) -> Option<&'static str> {
    REGION_NAMES
        .iter()
        .find(|(region, _)| *region == code)
        .map(|(_, name)| *name)
}

/// Whether events in this region ran the remote format this season.
pub fn is_remote_format(code: &str) -> bool {
    REMOTE_FORMAT_REGIONS.contains(&code)
}
