//! Fixed text shown on every page. None of it is derived from the data at runtime.

pub const SIDEBAR_HEADER: &str = "User Input Parameters";

pub const SIDEBAR_NOTE: &str = "This app provides an interactive analysis of air quality data in Beijing. Select a station from the dropdown to explore its specific data.";

pub const CONCLUSIONS_INTRO: &str = "Based on the analysis:";

pub const CONCLUSIONS: [&str; 3] = [
    "PM2.5 levels show clear seasonal patterns, with higher levels typically observed in winter.",
    "There is a correlation between PM2.5 levels and meteorological factors, particularly temperature and pressure.",
    "Clustering analysis reveals distinct groups of air quality conditions, which could be related to different weather patterns or pollution sources.",
];
