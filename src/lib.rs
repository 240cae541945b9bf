pub mod almagest_errors;
pub mod arabic_parts;
pub mod body;
pub mod constants;
pub mod conversion;
pub mod earth;
pub mod engine_params;
pub mod ephemeris;
pub mod geocentric;
pub mod kepler;
pub mod lunar_points;
pub mod moon;
pub mod orbit_type;
pub mod pluto;
pub mod position;
pub mod ref_system;
pub mod series;
pub mod speed;
pub mod sun;
pub mod time;
pub mod vsop87;

pub use body::Body;
pub use ephemeris::Ephemeris;
pub use position::PlanetPosition;
