mod common;

use almagest::{
    arabic_parts::{part_of_fortune, part_of_spirit, sect, ArabicPart, Sect},
    body::Body,
    conversion::normalize_degrees,
    Ephemeris,
};
use common::assert_longitude_close;

#[test]
fn test_fortune_and_spirit_from_engine_positions() {
    let ephemeris = Ephemeris::default();
    let jd = 2460000.5;
    let sun = ephemeris.position(Body::Sun, jd).longitude();
    let moon = ephemeris.position(Body::Moon, jd).longitude();

    for ascendant in [0.0, 45.0, 123.4, 250.0, 359.9] {
        let fortune = ephemeris.arabic_part(ArabicPart::Fortune, jd, ascendant);
        let spirit = ephemeris.arabic_part(ArabicPart::Spirit, jd, ascendant);

        assert_longitude_close(fortune, part_of_fortune(ascendant, sun, moon), 1e-9, "fortune");
        assert_longitude_close(spirit, part_of_spirit(ascendant, sun, moon), 1e-9, "spirit");

        let expected = match sect(sun, ascendant) {
            Sect::Day => normalize_degrees(ascendant + moon - sun),
            Sect::Night => normalize_degrees(ascendant + sun - moon),
        };
        assert_longitude_close(fortune, expected, 1e-9, "fortune formula");
    }
}

#[test]
fn test_new_moon_puts_fortune_on_the_ascendant() {
    // Sun and Moon conjunct: both lots fall on the Ascendant
    let asc = 200.0;
    assert_longitude_close(part_of_fortune(asc, 80.0, 80.0), asc, 1e-12, "fortune");
    assert_longitude_close(part_of_spirit(asc, 80.0, 80.0), asc, 1e-12, "spirit");
}
