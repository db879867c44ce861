use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
pub struct Cli {
    /// Route category on map.schweizmobil.ch.
    #[arg(value_enum)]
    pub category: RouteCategory,

    /// Route number as signposted along the route.
    pub route_number: u32,

    /// Output GPX file, overwritten if it already exists.
    #[arg(default_value = "out.gpx")]
    pub output_path: String,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteCategory {
    National,
    Regional,
    Local,
    SnowshoeLocal,
}

impl RouteCategory {
    /// Feature layer holding this category's routes.
    pub fn layer(self) -> &'static str {
        match self {
            RouteCategory::National => "WanderlandRoutenNational",
            RouteCategory::Regional => "WanderlandRoutenRegional",
            RouteCategory::Local => "WanderlandRoutenLokal",
            RouteCategory::SnowshoeLocal => "SnowshoeRoutenLokal",
        }
    }
}
