mod params;
mod support;
