#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Window {
    #[default]
    All,
    Week,
    Month,
}

impl Window {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Week => "This Week",
            Self::Month => "This Month",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Some(Self::All),
            "week" | "this week" | "w" => Some(Self::Week),
            "month" | "this month" | "m" => Some(Self::Month),
            _ => None,
        }
    }

    pub fn all() -> &'static [Window] {
        &[Self::All, Self::Week, Self::Month]
    }

    pub fn next(&self) -> Self {
        match self {
            Self::All => Self::Week,
            Self::Week => Self::Month,
            Self::Month => Self::All,
        }
    }
}

impl std::fmt::Display for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
