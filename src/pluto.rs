//! # Pluto
//!
//! Heliocentric position of Pluto from the Meeus ch.37 periodic series. The arguments are
//! integer combinations of the mean longitudes of Jupiter (J), Saturn (S) and Pluto (P):
//!
//! ```text
//! α = j·J + s·S + p·P
//! l = 238.958116° + 144.96°·T + Σ (A sin α + B cos α)  (1e-6 degree)
//! b = −3.908239°              + Σ (A sin α + B cos α)  (1e-6 degree)
//! r = 40.7241346 AU           + Σ (A sin α + B cos α)  (1e-7 AU)
//! ```
//!
//! The series is fitted over 1885–2099 and gives coordinates in the J2000 ecliptic; they are
//! rotated to the ecliptic of date before the geocentric transform. Outside the fitting
//! interval the accuracy slowly degrades.

use crate::{
    constants::{JulianDate, RADEG},
    conversion::{RectangularVector, SphericalPosition},
    ref_system::ecliptic_precession,
    time::julian_centuries,
};

/// Multipliers of (J, S, P) then the (sin, cos) coefficients of longitude, latitude and radius.
struct PlutoTerm([i8; 3], [f64; 2], [f64; 2], [f64; 2]);

const PLUTO_TERMS: &[PlutoTerm] = &[
    PlutoTerm([0, 0, 1], [-19799805.0, 19850055.0], [-5452852.0, -14974862.0], [66865439.0, 68951812.0]),
    PlutoTerm([0, 0, 2], [897144.0, -4954829.0], [3527812.0, 1672790.0], [-11827535.0, -332538.0]),
    PlutoTerm([0, 0, 3], [611149.0, 1211027.0], [-1050748.0, 327647.0], [1593179.0, -1438890.0]),
    PlutoTerm([0, 0, 4], [-341243.0, -189585.0], [178690.0, -292153.0], [-18444.0, 483220.0]),
    PlutoTerm([0, 0, 5], [129287.0, -34992.0], [18650.0, 100340.0], [-65977.0, -85431.0]),
    PlutoTerm([0, 0, 6], [-38164.0, 30893.0], [-30697.0, -25823.0], [31174.0, -6032.0]),
    PlutoTerm([0, 1, -1], [20442.0, -9987.0], [4878.0, 11248.0], [-5794.0, 22161.0]),
    PlutoTerm([0, 1, 0], [-4063.0, -5071.0], [226.0, -64.0], [4601.0, 4032.0]),
    PlutoTerm([0, 1, 1], [-6016.0, -3336.0], [2030.0, -836.0], [-1729.0, 234.0]),
    PlutoTerm([0, 1, 2], [-3956.0, 3039.0], [69.0, -604.0], [-415.0, 702.0]),
    PlutoTerm([0, 1, 3], [-667.0, 3572.0], [-247.0, -567.0], [239.0, 723.0]),
    PlutoTerm([0, 2, -2], [1276.0, 501.0], [-57.0, 1.0], [67.0, -67.0]),
    PlutoTerm([0, 2, -1], [1152.0, -917.0], [-122.0, 175.0], [1034.0, -451.0]),
    PlutoTerm([0, 2, 0], [630.0, -1277.0], [-49.0, -164.0], [-129.0, 504.0]),
    PlutoTerm([1, -1, 0], [2571.0, -459.0], [-197.0, 199.0], [480.0, -231.0]),
    PlutoTerm([1, -1, 1], [899.0, -1449.0], [-25.0, 217.0], [2.0, -441.0]),
    PlutoTerm([1, 0, -3], [-1016.0, 1043.0], [589.0, -248.0], [-3359.0, 265.0]),
    PlutoTerm([1, 0, -2], [-2343.0, -1012.0], [-269.0, 711.0], [7856.0, -7832.0]),
    PlutoTerm([1, 0, -1], [7042.0, 788.0], [185.0, 193.0], [36.0, 45763.0]),
    PlutoTerm([1, 0, 0], [1199.0, -338.0], [315.0, 807.0], [8663.0, 8547.0]),
    PlutoTerm([1, 0, 1], [418.0, -67.0], [-130.0, -43.0], [-809.0, -769.0]),
    PlutoTerm([1, 0, 2], [120.0, -274.0], [5.0, 3.0], [263.0, -144.0]),
    PlutoTerm([1, 0, 3], [-60.0, -159.0], [2.0, 17.0], [-126.0, 32.0]),
    PlutoTerm([1, 0, 4], [-82.0, -29.0], [2.0, 5.0], [-35.0, -16.0]),
    PlutoTerm([1, 1, -3], [-36.0, -29.0], [2.0, 3.0], [-19.0, -4.0]),
    PlutoTerm([1, 1, -2], [-40.0, 7.0], [3.0, 1.0], [-15.0, 8.0]),
    PlutoTerm([1, 1, -1], [-14.0, 22.0], [2.0, -1.0], [-4.0, 12.0]),
    PlutoTerm([1, 1, 0], [4.0, 13.0], [1.0, -1.0], [5.0, 6.0]),
    PlutoTerm([1, 1, 1], [5.0, 2.0], [0.0, -1.0], [3.0, 1.0]),
    PlutoTerm([1, 1, 3], [-1.0, 0.0], [0.0, 0.0], [6.0, -2.0]),
    PlutoTerm([2, 0, -6], [2.0, 0.0], [0.0, -2.0], [2.0, 2.0]),
    PlutoTerm([2, 0, -5], [-4.0, 5.0], [2.0, 2.0], [-2.0, -2.0]),
    PlutoTerm([2, 0, -4], [4.0, -7.0], [-7.0, 0.0], [14.0, 13.0]),
    PlutoTerm([2, 0, -3], [14.0, 24.0], [10.0, -8.0], [-63.0, 13.0]),
    PlutoTerm([2, 0, -2], [-49.0, -34.0], [-3.0, 20.0], [136.0, -236.0]),
    PlutoTerm([2, 0, -1], [163.0, -48.0], [6.0, 5.0], [273.0, 1065.0]),
    PlutoTerm([2, 0, 0], [9.0, -24.0], [14.0, 17.0], [251.0, 149.0]),
    PlutoTerm([2, 0, 1], [-4.0, 1.0], [-2.0, 0.0], [-25.0, -9.0]),
    PlutoTerm([2, 0, 2], [-3.0, 1.0], [0.0, 0.0], [9.0, -2.0]),
    PlutoTerm([2, 0, 3], [1.0, 3.0], [0.0, 0.0], [-8.0, 7.0]),
    PlutoTerm([3, 0, -2], [-3.0, -1.0], [0.0, 1.0], [2.0, -10.0]),
    PlutoTerm([3, 0, -1], [5.0, -3.0], [0.0, 0.0], [19.0, 35.0]),
    PlutoTerm([3, 0, 0], [0.0, 0.0], [1.0, 0.0], [10.0, 3.0]),
];

/// Heliocentric ecliptic coordinates of Pluto, mean equinox of J2000.0.
///
/// Arguments
/// ---------
/// * `jd`: Julian Date (TT).
///
/// Return
/// ------
/// * [`SphericalPosition`] with heliocentric longitude and latitude in degrees and the
///   radius vector in AU.
pub fn heliocentric_j2000(jd: JulianDate) -> SphericalPosition {
    let t = julian_centuries(jd);
    let jupiter = 34.35 + 3034.9057 * t;
    let saturn = 50.08 + 1222.1138 * t;
    let pluto = 238.96 + 144.96 * t;

    let (sum_l, sum_b, sum_r) = PLUTO_TERMS.iter().fold(
        (0.0, 0.0, 0.0),
        |(sum_l, sum_b, sum_r), PlutoTerm([j, s, p], l, b, r)| {
            let alpha =
                (f64::from(*j) * jupiter + f64::from(*s) * saturn + f64::from(*p) * pluto) * RADEG;
            let (sin_a, cos_a) = alpha.sin_cos();
            (
                sum_l + l[0] * sin_a + l[1] * cos_a,
                sum_b + b[0] * sin_a + b[1] * cos_a,
                sum_r + r[0] * sin_a + r[1] * cos_a,
            )
        },
    );

    SphericalPosition::new(
        238.958116 + 144.96 * t + sum_l * 1e-6,
        -3.908239 + sum_b * 1e-6,
        40.7241346 + sum_r * 1e-7,
    )
}

/// Heliocentric rectangular vector of Pluto (AU), ecliptic and equinox of date.
pub fn heliocentric_position(jd: JulianDate) -> RectangularVector {
    ecliptic_precession(jd) * heliocentric_j2000(jd).to_rectangular()
}

#[cfg(test)]
mod pluto_test {
    use super::*;
    use crate::{
        constants::J2000, conversion::angular_distance, earth::EarthReference,
        geocentric::geocentric_position,
    };
    use approx::assert_relative_eq;

    #[test]
    fn test_meeus_example_37a() {
        // 1992 October 13.0 TD: l = 232.74009, b = 14.58769, r = 29.711383
        let pluto = heliocentric_j2000(2448908.5);
        assert!(angular_distance(pluto.longitude, 232.74009) < 0.002, "{}", pluto.longitude);
        assert_relative_eq!(pluto.latitude, 14.58769, epsilon = 0.002);
        assert_relative_eq!(pluto.distance, 29.711383, epsilon = 5e-4);
    }

    #[test]
    fn test_geocentric_longitude_at_j2000() {
        let earth = EarthReference::at(J2000);
        let pos = geocentric_position(&heliocentric_position(J2000), &earth);
        assert!(angular_distance(pos.longitude, 251.45) < 0.1, "{}", pos.longitude);
    }

    #[test]
    fn test_precession_moves_longitude_forward() {
        // About 1.4° per century of general precession
        let jd = J2000 + 36525.0;
        let j2000 = heliocentric_j2000(jd);
        let of_date = SphericalPosition::from_rectangular(&heliocentric_position(jd));
        let shift = of_date.longitude - j2000.longitude;
        assert!(shift > 1.3 && shift < 1.5, "{shift}");
        assert_relative_eq!(of_date.distance, j2000.distance, epsilon = 1e-12);
    }
}
