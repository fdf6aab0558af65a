//! Enumerated search options and their wire spellings.
//!
//! Every option is parsed through an allow-list: only the exact wire value is
//! accepted, anything else is rejected so callers can fall back to the default.

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $variant:ident => $wire:literal ),+ $(,)?
        }
        default = $default:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $wire, )+
                }
            }

            pub fn parse(raw: &str) -> Option<Self> {
                match raw {
                    $( $wire => Some($name::$variant), )+
                    _ => None,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// Content category used both as query topic and short-form type filter.
    pub enum Topic {
        All => "all",
        Shopping => "shopping",
        Clip => "clip",
        Game => "game",
        Food => "food",
        Animal => "animal",
        Knowledge => "knowledge",
        Beauty => "beauty",
        Sports => "sports",
        Entertainment => "entertainment",
        Other => "other",
    }
    default = All;
}

/// Short-form filter shares the topic vocabulary.
pub type ShortFormType = Topic;

wire_enum! {
    /// Result presentation mode reflected into the URL.
    pub enum ViewMode {
        Grid => "grid",
        List => "list",
    }
    default = Grid;
}

wire_enum! {
    pub enum SortOption {
        SubscriberAsc => "subscriberAsc",
        Relevance => "relevance",
        Views => "views",
        Latest => "latest",
        Recommended => "recommended",
        PerformanceOnly => "performanceOnly",
        OpportunityOnly => "opportunityOnly",
    }
    default = SubscriberAsc;
}

wire_enum! {
    pub enum Period {
        Last24Hours => "24h",
        Last7Days => "7d",
        Last30Days => "30d",
        Last90Days => "90d",
        Last180Days => "180d",
        Last365Days => "365d",
        Last730Days => "730d",
        All => "all",
    }
    default = Last7Days;
}

wire_enum! {
    pub enum DurationBucket {
        All => "all",
        Under4Minutes => "under4m",
        FourTo20Minutes => "4to20m",
        Over20Minutes => "over20m",
    }
    default = All;
}

wire_enum! {
    pub enum ScriptType {
        All => "all",
        Scripted => "scripted",
        NoScript => "noScript",
    }
    default = All;
}

wire_enum! {
    /// Metric shown when hovering a result card.
    pub enum HoverMetric {
        VidiqTrend => "vidiqTrend",
        EstimatedRevenue => "estimatedRevenue",
    }
    default = VidiqTrend;
}

wire_enum! {
    /// Named filter bundles; see [`crate::apply_core_preset`].
    pub enum CorePreset {
        None => "none",
        NewRapidGrowth => "newRapidGrowth",
        EfficiencyMonster => "efficiencyMonster",
        FastRising => "fastRising",
        KrTrend => "krTrend",
        GlobalTrend => "globalTrend",
    }
    default = None;
}

/// Number of results requested per search. Only three sizes are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResultLimit {
    Top50,
    Top150,
    #[default]
    Top250,
}

impl ResultLimit {
    pub const ALL: &'static [ResultLimit] =
        &[ResultLimit::Top50, ResultLimit::Top150, ResultLimit::Top250];

    pub fn value(self) -> u16 {
        match self {
            ResultLimit::Top50 => 50,
            ResultLimit::Top150 => 150,
            ResultLimit::Top250 => 250,
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "50" => Some(ResultLimit::Top50),
            "150" => Some(ResultLimit::Top150),
            "250" => Some(ResultLimit::Top250),
            _ => None,
        }
    }
}

impl std::fmt::Display for ResultLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}
