//! The closed ten-franchise universe: codes, display names, and site slugs
//! live in one table so the three can never drift apart.

/// Reference season for tenure derivation.
pub const SEASON_YEAR: i32 = 2026;

#[derive(Clone, Copy, Debug)]
pub struct Franchise {
    pub code: &'static str,
    pub name: &'static str,
    pub slug: &'static str,
}

pub const FRANCHISES: &[Franchise] = &[
    Franchise {
        code: "CSK",
        name: "Chennai Super Kings",
        slug: "chennai-super-kings",
    },
    Franchise {
        code: "DC",
        name: "Delhi Capitals",
        slug: "delhi-capitals",
    },
    Franchise {
        code: "GT",
        name: "Gujarat Titans",
        slug: "gujarat-titans",
    },
    Franchise {
        code: "KKR",
        name: "Kolkata Knight Riders",
        slug: "kolkata-knight-riders",
    },
    Franchise {
        code: "LSG",
        name: "Lucknow Super Giants",
        slug: "lucknow-super-giants",
    },
    Franchise {
        code: "MI",
        name: "Mumbai Indians",
        slug: "mumbai-indians",
    },
    Franchise {
        code: "PBKS",
        name: "Punjab Kings",
        slug: "punjab-kings",
    },
    Franchise {
        code: "RR",
        name: "Rajasthan Royals",
        slug: "rajasthan-royals",
    },
    Franchise {
        code: "RCB",
        name: "Royal Challengers Bengaluru",
        slug: "royal-challengers-bengaluru",
    },
    Franchise {
        code: "SRH",
        name: "Sunrisers Hyderabad",
        slug: "sunrisers-hyderabad",
    },
];

pub fn is_team_code(line: &str) -> bool {
    FRANCHISES.iter().any(|f| f.code == line)
}

pub fn is_team_name(line: &str) -> bool {
    FRANCHISES.iter().any(|f| f.name == line)
}

/// Maps a scraped display name onto its code. Names outside the ten-team
/// universe yield `None` and are dropped by callers.
pub fn code_for_name(name: &str) -> Option<&'static str> {
    FRANCHISES
        .iter()
        .find(|f| f.name == name)
        .map(|f| f.code)
}

pub fn franchise_for_code(code: &str) -> Option<&'static Franchise> {
    FRANCHISES.iter().find(|f| f.code == code)
}
