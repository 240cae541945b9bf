//! Truncated VSOP87 series for Earth: heliocentric longitude `L`, latitude `B` and radius `R`,
//! mean ecliptic and equinox of date. Amplitudes are in units of 1e-8 (radians for `L` and `B`, AU for `R`).

use crate::series::{SeriesTable, SeriesTerm};

use super::Vsop87Body;

const L0: &[SeriesTerm] = &[
    SeriesTerm(175347046.0, 0.0, 0.0),
    SeriesTerm(3341656.0, 4.6692568, 6283.0758500),
    SeriesTerm(34894.0, 4.62610, 12566.15170),
    SeriesTerm(3497.0, 2.7441, 5753.3849),
    SeriesTerm(3418.0, 2.8289, 3.5231),
    SeriesTerm(3136.0, 3.6277, 77713.7715),
    SeriesTerm(2676.0, 4.4181, 7860.4194),
    SeriesTerm(2343.0, 6.1352, 3930.2097),
    SeriesTerm(1324.0, 0.7425, 11506.7698),
    SeriesTerm(1273.0, 2.0371, 529.6910),
    SeriesTerm(1199.0, 1.1096, 1577.3435),
    SeriesTerm(990.0, 5.233, 5884.927),
    SeriesTerm(902.0, 2.045, 26.298),
    SeriesTerm(857.0, 3.508, 398.149),
    SeriesTerm(780.0, 1.179, 5223.694),
    SeriesTerm(753.0, 2.533, 5507.553),
    SeriesTerm(505.0, 4.583, 18849.228),
    SeriesTerm(492.0, 4.205, 775.523),
    SeriesTerm(357.0, 2.920, 0.067),
    SeriesTerm(317.0, 5.849, 11790.629),
    SeriesTerm(284.0, 1.899, 796.298),
    SeriesTerm(271.0, 0.315, 10977.079),
    SeriesTerm(243.0, 0.345, 5486.778),
    SeriesTerm(206.0, 4.806, 2544.314),
    SeriesTerm(205.0, 1.869, 5573.143),
    SeriesTerm(202.0, 2.458, 6069.777),
    SeriesTerm(156.0, 0.833, 213.299),
    SeriesTerm(132.0, 3.411, 2942.463),
    SeriesTerm(126.0, 1.083, 20.775),
    SeriesTerm(115.0, 0.645, 0.980),
    SeriesTerm(103.0, 0.636, 4694.003),
    SeriesTerm(102.0, 0.976, 15720.839),
    SeriesTerm(102.0, 4.267, 7.114),
    SeriesTerm(99.0, 6.21, 2146.17),
    SeriesTerm(98.0, 0.68, 155.42),
    SeriesTerm(86.0, 5.98, 161000.69),
    SeriesTerm(85.0, 1.30, 6275.96),
    SeriesTerm(85.0, 3.67, 71430.70),
    SeriesTerm(80.0, 1.81, 17260.15),
    SeriesTerm(79.0, 3.04, 12036.46),
    SeriesTerm(75.0, 1.76, 5088.63),
    SeriesTerm(74.0, 3.50, 3154.69),
    SeriesTerm(74.0, 4.68, 801.82),
    SeriesTerm(70.0, 0.83, 9437.76),
    SeriesTerm(62.0, 3.98, 8827.39),
    SeriesTerm(61.0, 1.82, 7084.90),
    SeriesTerm(57.0, 2.78, 6286.60),
    SeriesTerm(56.0, 4.39, 14143.50),
    SeriesTerm(56.0, 3.47, 6279.55),
    SeriesTerm(52.0, 0.19, 12139.55),
    SeriesTerm(52.0, 1.33, 1748.02),
    SeriesTerm(51.0, 0.28, 5856.48),
    SeriesTerm(49.0, 0.49, 1194.45),
    SeriesTerm(41.0, 5.37, 8429.24),
    SeriesTerm(41.0, 2.40, 19651.05),
    SeriesTerm(39.0, 6.17, 10447.39),
    SeriesTerm(37.0, 6.04, 10213.29),
    SeriesTerm(37.0, 2.57, 1059.38),
    SeriesTerm(36.0, 1.71, 2352.87),
    SeriesTerm(36.0, 1.78, 6812.77),
    SeriesTerm(33.0, 0.59, 17789.85),
    SeriesTerm(30.0, 0.44, 83996.85),
    SeriesTerm(30.0, 2.74, 1349.87),
    SeriesTerm(25.0, 3.16, 4690.48),
];

const L1: &[SeriesTerm] = &[
    SeriesTerm(628331966747.0, 0.0, 0.0),
    SeriesTerm(206059.0, 2.678235, 6283.075850),
    SeriesTerm(4303.0, 2.6351, 12566.1517),
    SeriesTerm(425.0, 1.590, 3.523),
    SeriesTerm(119.0, 5.796, 26.298),
    SeriesTerm(109.0, 2.966, 1577.344),
    SeriesTerm(93.0, 2.59, 18849.23),
    SeriesTerm(72.0, 1.14, 529.69),
    SeriesTerm(68.0, 1.87, 398.15),
    SeriesTerm(67.0, 4.41, 5507.55),
    SeriesTerm(59.0, 2.89, 5223.69),
    SeriesTerm(56.0, 2.17, 155.42),
    SeriesTerm(45.0, 0.40, 796.30),
    SeriesTerm(36.0, 0.47, 775.52),
    SeriesTerm(29.0, 2.65, 7.11),
    SeriesTerm(21.0, 5.34, 0.98),
    SeriesTerm(19.0, 1.85, 5486.78),
    SeriesTerm(19.0, 4.97, 213.30),
    SeriesTerm(17.0, 2.99, 6275.96),
    SeriesTerm(16.0, 0.03, 2544.31),
    SeriesTerm(16.0, 1.43, 2146.17),
    SeriesTerm(15.0, 1.21, 10977.08),
    SeriesTerm(12.0, 2.83, 1748.02),
    SeriesTerm(12.0, 3.26, 5088.63),
    SeriesTerm(12.0, 5.27, 1194.45),
    SeriesTerm(12.0, 2.08, 4694.00),
    SeriesTerm(11.0, 0.77, 553.57),
    SeriesTerm(10.0, 1.30, 6286.60),
    SeriesTerm(10.0, 4.24, 1349.87),
    SeriesTerm(9.0, 2.70, 242.73),
    SeriesTerm(9.0, 5.64, 951.72),
    SeriesTerm(8.0, 5.30, 2352.87),
    SeriesTerm(6.0, 2.65, 9437.76),
    SeriesTerm(6.0, 4.67, 4690.48),
];

const L2: &[SeriesTerm] = &[
    SeriesTerm(52919.0, 0.0, 0.0),
    SeriesTerm(8720.0, 1.0721, 6283.0758),
    SeriesTerm(309.0, 0.867, 12566.152),
    SeriesTerm(27.0, 0.05, 3.52),
    SeriesTerm(16.0, 5.19, 26.30),
    SeriesTerm(16.0, 3.68, 155.42),
    SeriesTerm(10.0, 0.76, 18849.23),
    SeriesTerm(9.0, 2.06, 77713.77),
    SeriesTerm(7.0, 0.83, 775.52),
    SeriesTerm(5.0, 4.66, 1577.34),
    SeriesTerm(4.0, 1.03, 7.11),
    SeriesTerm(4.0, 3.44, 5573.14),
    SeriesTerm(3.0, 5.14, 796.30),
    SeriesTerm(3.0, 6.05, 5507.55),
    SeriesTerm(3.0, 1.19, 242.73),
    SeriesTerm(3.0, 6.12, 529.69),
    SeriesTerm(3.0, 0.31, 398.15),
    SeriesTerm(3.0, 2.28, 553.57),
    SeriesTerm(2.0, 4.38, 5223.69),
    SeriesTerm(2.0, 3.75, 0.98),
];

const L3: &[SeriesTerm] = &[
    SeriesTerm(289.0, 5.844, 6283.076),
    SeriesTerm(35.0, 0.0, 0.0),
    SeriesTerm(17.0, 5.49, 12566.15),
    SeriesTerm(3.0, 5.20, 155.42),
    SeriesTerm(1.0, 4.72, 3.52),
    SeriesTerm(1.0, 5.30, 18849.23),
    SeriesTerm(1.0, 5.97, 242.73),
];

const L4: &[SeriesTerm] = &[
    SeriesTerm(114.0, 3.142, 0.0),
    SeriesTerm(8.0, 4.13, 6283.08),
    SeriesTerm(1.0, 3.84, 12566.15),
];

const L5: &[SeriesTerm] = &[
    SeriesTerm(1.0, 3.14, 0.0),
];

const B0: &[SeriesTerm] = &[
    SeriesTerm(280.0, 3.199, 84334.662),
    SeriesTerm(102.0, 5.422, 5507.553),
    SeriesTerm(80.0, 3.88, 5223.69),
    SeriesTerm(44.0, 3.70, 2352.87),
    SeriesTerm(32.0, 4.00, 1577.34),
];

const B1: &[SeriesTerm] = &[
    SeriesTerm(9.0, 3.90, 5507.55),
    SeriesTerm(6.0, 1.73, 5223.69),
];

const R0: &[SeriesTerm] = &[
    SeriesTerm(100013989.0, 0.0, 0.0),
    SeriesTerm(1670700.0, 3.0984635, 6283.0758500),
    SeriesTerm(13956.0, 3.05525, 12566.15170),
    SeriesTerm(3084.0, 5.1985, 77713.7715),
    SeriesTerm(1628.0, 1.1739, 5753.3849),
    SeriesTerm(1576.0, 2.8469, 7860.4194),
    SeriesTerm(925.0, 5.453, 11506.770),
    SeriesTerm(542.0, 4.564, 3930.210),
    SeriesTerm(472.0, 3.661, 5884.927),
    SeriesTerm(346.0, 0.964, 5507.553),
    SeriesTerm(329.0, 5.900, 5223.694),
    SeriesTerm(307.0, 0.299, 5573.143),
    SeriesTerm(243.0, 4.273, 11790.629),
    SeriesTerm(212.0, 5.847, 1577.344),
    SeriesTerm(186.0, 5.022, 10977.079),
    SeriesTerm(175.0, 3.012, 18849.228),
    SeriesTerm(110.0, 5.055, 5486.778),
    SeriesTerm(98.0, 0.89, 6069.78),
    SeriesTerm(86.0, 5.69, 15720.84),
    SeriesTerm(86.0, 1.27, 161000.69),
    SeriesTerm(65.0, 0.27, 17260.15),
    SeriesTerm(63.0, 0.92, 529.69),
    SeriesTerm(57.0, 2.01, 83996.85),
    SeriesTerm(56.0, 5.24, 71430.70),
    SeriesTerm(49.0, 3.25, 2544.31),
    SeriesTerm(47.0, 2.58, 775.52),
    SeriesTerm(45.0, 5.54, 9437.76),
    SeriesTerm(43.0, 6.01, 6275.96),
    SeriesTerm(39.0, 5.36, 4694.00),
    SeriesTerm(38.0, 2.39, 8827.39),
    SeriesTerm(37.0, 0.83, 19651.05),
    SeriesTerm(37.0, 4.90, 12139.55),
    SeriesTerm(36.0, 1.67, 12036.46),
    SeriesTerm(35.0, 1.84, 2942.46),
    SeriesTerm(33.0, 0.24, 7084.90),
    SeriesTerm(32.0, 0.18, 5088.63),
    SeriesTerm(32.0, 1.78, 398.15),
    SeriesTerm(28.0, 1.21, 6286.60),
    SeriesTerm(28.0, 1.90, 6279.55),
    SeriesTerm(26.0, 4.59, 10447.39),
];

const R1: &[SeriesTerm] = &[
    SeriesTerm(103019.0, 1.107490, 6283.075850),
    SeriesTerm(1721.0, 1.0644, 12566.1517),
    SeriesTerm(702.0, 3.142, 0.0),
    SeriesTerm(32.0, 1.02, 18849.23),
    SeriesTerm(31.0, 2.84, 5507.55),
    SeriesTerm(25.0, 1.32, 5223.69),
    SeriesTerm(18.0, 1.42, 1577.34),
    SeriesTerm(10.0, 5.91, 10977.08),
    SeriesTerm(9.0, 1.42, 6275.96),
    SeriesTerm(9.0, 0.27, 5486.78),
];

const R2: &[SeriesTerm] = &[
    SeriesTerm(4359.0, 5.7846, 6283.0758),
    SeriesTerm(124.0, 5.579, 12566.152),
    SeriesTerm(12.0, 3.14, 0.0),
    SeriesTerm(9.0, 3.63, 77713.77),
    SeriesTerm(6.0, 1.87, 5573.14),
    SeriesTerm(3.0, 5.47, 18849.23),
];

const R3: &[SeriesTerm] = &[
    SeriesTerm(145.0, 4.273, 6283.076),
    SeriesTerm(7.0, 3.92, 12566.15),
];

const R4: &[SeriesTerm] = &[
    SeriesTerm(4.0, 2.56, 6283.08),
];

pub const EARTH: Vsop87Body = Vsop87Body {
    longitude: SeriesTable::new(&[L0, L1, L2, L3, L4, L5], 1e8),
    latitude: SeriesTable::new(&[B0, B1], 1e8),
    radius: SeriesTable::new(&[R0, R1, R2, R3, R4], 1e8),
};
