//! Truncated VSOP87 series for Venus: heliocentric longitude `L`, latitude `B` and radius `R`,
//! mean ecliptic and equinox of date. Amplitudes are in units of 1e-8 (radians for `L` and `B`, AU for `R`).

use crate::series::{SeriesTable, SeriesTerm};

use super::Vsop87Body;

const L0: &[SeriesTerm] = &[
    SeriesTerm(317614667.0, 0.0, 0.0),
    SeriesTerm(1353968.0, 5.5931332, 10213.2855462),
    SeriesTerm(89892.0, 5.30650, 20426.57109),
    SeriesTerm(5477.0, 4.4163, 7860.4194),
    SeriesTerm(3456.0, 2.6996, 11790.6291),
    SeriesTerm(2372.0, 2.9938, 3930.2097),
    SeriesTerm(1664.0, 4.2502, 1577.3435),
    SeriesTerm(1438.0, 4.1575, 9683.5946),
    SeriesTerm(1317.0, 5.1867, 26.2983),
    SeriesTerm(1201.0, 6.1536, 30639.8566),
    SeriesTerm(769.0, 0.816, 9437.763),
    SeriesTerm(761.0, 1.950, 529.691),
    SeriesTerm(708.0, 1.065, 775.523),
    SeriesTerm(585.0, 3.998, 191.448),
    SeriesTerm(500.0, 4.123, 15720.839),
    SeriesTerm(429.0, 3.586, 19367.189),
    SeriesTerm(327.0, 5.677, 5507.553),
    SeriesTerm(326.0, 4.591, 10404.734),
    SeriesTerm(232.0, 3.163, 9153.904),
    SeriesTerm(180.0, 4.653, 1109.379),
    SeriesTerm(155.0, 5.570, 19651.048),
    SeriesTerm(128.0, 4.226, 20.775),
    SeriesTerm(128.0, 0.962, 5661.332),
    SeriesTerm(106.0, 1.537, 801.821),
];

const L1: &[SeriesTerm] = &[
    SeriesTerm(1021352943053.0, 0.0, 0.0),
    SeriesTerm(95708.0, 2.46424, 10213.28555),
    SeriesTerm(14445.0, 0.51625, 20426.57109),
    SeriesTerm(213.0, 1.795, 30639.857),
    SeriesTerm(174.0, 2.655, 26.298),
    SeriesTerm(152.0, 6.106, 1577.344),
    SeriesTerm(82.0, 5.70, 191.45),
    SeriesTerm(70.0, 2.68, 9437.76),
    SeriesTerm(52.0, 3.60, 775.52),
    SeriesTerm(38.0, 1.03, 529.69),
    SeriesTerm(30.0, 1.25, 5507.55),
    SeriesTerm(25.0, 6.11, 10404.73),
];

const L2: &[SeriesTerm] = &[
    SeriesTerm(54127.0, 0.0, 0.0),
    SeriesTerm(3891.0, 0.3451, 10213.2855),
    SeriesTerm(1338.0, 2.0201, 20426.5711),
    SeriesTerm(24.0, 2.05, 26.30),
    SeriesTerm(19.0, 3.54, 30639.86),
    SeriesTerm(10.0, 3.97, 775.52),
    SeriesTerm(7.0, 1.52, 1577.34),
    SeriesTerm(6.0, 1.00, 191.45),
];

const L3: &[SeriesTerm] = &[
    SeriesTerm(136.0, 4.804, 10213.286),
    SeriesTerm(78.0, 3.67, 20426.57),
    SeriesTerm(26.0, 0.0, 0.0),
];

const L4: &[SeriesTerm] = &[
    SeriesTerm(114.0, 3.1416, 0.0),
    SeriesTerm(3.0, 5.21, 20426.57),
    SeriesTerm(2.0, 2.51, 10213.29),
];

const L5: &[SeriesTerm] = &[
    SeriesTerm(1.0, 3.14, 0.0),
];

const B0: &[SeriesTerm] = &[
    SeriesTerm(5923638.0, 0.2670278, 10213.2855462),
    SeriesTerm(40108.0, 1.14737, 20426.57109),
    SeriesTerm(32815.0, 3.14159, 0.0),
    SeriesTerm(1011.0, 1.0895, 30639.8566),
    SeriesTerm(149.0, 6.254, 18073.705),
    SeriesTerm(138.0, 0.860, 1577.344),
    SeriesTerm(130.0, 3.672, 9437.763),
    SeriesTerm(120.0, 3.705, 2352.866),
    SeriesTerm(108.0, 4.539, 22003.915),
];

const B1: &[SeriesTerm] = &[
    SeriesTerm(513348.0, 1.803643, 10213.285546),
    SeriesTerm(4380.0, 3.3862, 20426.5711),
    SeriesTerm(199.0, 0.0, 0.0),
    SeriesTerm(197.0, 2.530, 30639.857),
];

const B2: &[SeriesTerm] = &[
    SeriesTerm(22378.0, 3.38509, 10213.28555),
    SeriesTerm(282.0, 0.0, 0.0),
    SeriesTerm(173.0, 5.256, 20426.571),
    SeriesTerm(27.0, 3.87, 30639.86),
];

const B3: &[SeriesTerm] = &[
    SeriesTerm(647.0, 4.992, 10213.286),
    SeriesTerm(20.0, 3.14, 0.0),
    SeriesTerm(6.0, 0.77, 20426.57),
    SeriesTerm(3.0, 5.44, 30639.86),
];

const B4: &[SeriesTerm] = &[
    SeriesTerm(14.0, 0.32, 10213.29),
];

const R0: &[SeriesTerm] = &[
    SeriesTerm(72334821.0, 0.0, 0.0),
    SeriesTerm(489824.0, 4.021518, 10213.285546),
    SeriesTerm(1658.0, 4.9021, 20426.5711),
    SeriesTerm(1632.0, 2.8455, 7860.4194),
    SeriesTerm(1378.0, 1.1285, 11790.6291),
    SeriesTerm(498.0, 2.587, 9683.595),
    SeriesTerm(374.0, 1.423, 3930.210),
    SeriesTerm(264.0, 5.529, 9437.763),
    SeriesTerm(237.0, 2.551, 15720.839),
    SeriesTerm(222.0, 2.013, 19367.189),
    SeriesTerm(126.0, 2.728, 1577.344),
    SeriesTerm(119.0, 3.020, 10404.734),
];

const R1: &[SeriesTerm] = &[
    SeriesTerm(34551.0, 0.89199, 10213.28555),
    SeriesTerm(234.0, 1.772, 20426.571),
    SeriesTerm(234.0, 3.142, 0.0),
];

const R2: &[SeriesTerm] = &[
    SeriesTerm(1407.0, 5.0637, 10213.2855),
    SeriesTerm(16.0, 5.47, 20426.57),
    SeriesTerm(13.0, 0.0, 0.0),
];

const R3: &[SeriesTerm] = &[
    SeriesTerm(50.0, 3.22, 10213.29),
];

const R4: &[SeriesTerm] = &[
    SeriesTerm(1.0, 0.92, 10213.29),
];

pub const VENUS: Vsop87Body = Vsop87Body {
    longitude: SeriesTable::new(&[L0, L1, L2, L3, L4, L5], 1e8),
    latitude: SeriesTable::new(&[B0, B1, B2, B3, B4], 1e8),
    radius: SeriesTable::new(&[R0, R1, R2, R3, R4], 1e8),
};
