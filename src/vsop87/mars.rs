//! Truncated VSOP87 series for Mars: heliocentric longitude `L`, latitude `B` and radius `R`,
//! mean ecliptic and equinox of date. Amplitudes are in units of 1e-8 (radians for `L` and `B`, AU for `R`).

use crate::series::{SeriesTable, SeriesTerm};

use super::Vsop87Body;

const L0: &[SeriesTerm] = &[
    SeriesTerm(620347712.0, 0.0, 0.0),
    SeriesTerm(18656368.0, 5.05037100, 3340.61242670),
    SeriesTerm(1108217.0, 5.4009984, 6681.2248534),
    SeriesTerm(91798.0, 5.75479, 10021.83728),
    SeriesTerm(27745.0, 5.97050, 3.52312),
    SeriesTerm(12316.0, 0.84956, 2810.92146),
    SeriesTerm(10610.0, 2.93959, 2281.23050),
    SeriesTerm(8927.0, 4.1570, 0.0173),
    SeriesTerm(8716.0, 6.1101, 13362.4497),
    SeriesTerm(7775.0, 3.3397, 5621.8429),
    SeriesTerm(6798.0, 0.3646, 398.1490),
    SeriesTerm(4161.0, 0.2281, 2942.4634),
    SeriesTerm(3575.0, 1.6619, 2544.3144),
    SeriesTerm(3075.0, 0.8570, 191.4483),
    SeriesTerm(2938.0, 6.0789, 0.0673),
    SeriesTerm(2628.0, 0.6481, 3337.0893),
    SeriesTerm(2580.0, 0.0300, 3344.1355),
    SeriesTerm(2389.0, 5.0390, 796.2980),
    SeriesTerm(1799.0, 0.6563, 529.6910),
    SeriesTerm(1546.0, 2.9158, 1751.5395),
    SeriesTerm(1528.0, 1.1498, 6151.5339),
    SeriesTerm(1286.0, 3.0680, 2146.1654),
    SeriesTerm(1264.0, 3.6228, 5092.1520),
    SeriesTerm(1025.0, 3.6933, 8962.4553),
    SeriesTerm(892.0, 0.183, 16703.062),
    SeriesTerm(859.0, 2.401, 2914.014),
    SeriesTerm(833.0, 4.495, 3340.630),
    SeriesTerm(833.0, 2.464, 3340.595),
    SeriesTerm(749.0, 3.822, 155.420),
    SeriesTerm(724.0, 0.675, 3738.761),
    SeriesTerm(713.0, 3.663, 1059.382),
    SeriesTerm(655.0, 0.489, 3127.313),
    SeriesTerm(636.0, 2.922, 8432.764),
    SeriesTerm(553.0, 4.475, 1748.016),
    SeriesTerm(550.0, 3.810, 0.980),
    SeriesTerm(472.0, 3.625, 1194.447),
    SeriesTerm(426.0, 0.554, 6283.076),
    SeriesTerm(415.0, 0.497, 213.299),
    SeriesTerm(312.0, 0.999, 6677.702),
    SeriesTerm(307.0, 0.381, 6684.748),
    SeriesTerm(302.0, 4.486, 3532.061),
    SeriesTerm(299.0, 2.783, 6254.627),
    SeriesTerm(293.0, 4.221, 20.775),
    SeriesTerm(284.0, 5.769, 3149.164),
    SeriesTerm(281.0, 5.882, 1349.867),
    SeriesTerm(274.0, 0.542, 3340.545),
    SeriesTerm(274.0, 0.134, 3340.680),
    SeriesTerm(239.0, 5.372, 4136.910),
    SeriesTerm(236.0, 5.755, 3333.499),
    SeriesTerm(231.0, 1.282, 3870.303),
    SeriesTerm(221.0, 3.505, 382.897),
    SeriesTerm(204.0, 2.821, 1221.849),
    SeriesTerm(193.0, 3.357, 3.590),
    SeriesTerm(189.0, 1.491, 9492.146),
    SeriesTerm(179.0, 1.006, 951.718),
    SeriesTerm(174.0, 2.414, 553.569),
    SeriesTerm(172.0, 0.439, 5486.778),
    SeriesTerm(160.0, 3.949, 4562.461),
    SeriesTerm(144.0, 1.419, 135.065),
    SeriesTerm(140.0, 3.326, 2700.715),
    SeriesTerm(138.0, 4.301, 7.114),
    SeriesTerm(131.0, 4.045, 12303.068),
    SeriesTerm(128.0, 2.208, 1592.596),
    SeriesTerm(128.0, 1.807, 5088.629),
    SeriesTerm(117.0, 3.128, 7903.073),
    SeriesTerm(113.0, 3.701, 1589.073),
    SeriesTerm(110.0, 1.052, 242.729),
    SeriesTerm(105.0, 0.785, 8827.390),
    SeriesTerm(100.0, 3.243, 11773.377),
];

const L1: &[SeriesTerm] = &[
    SeriesTerm(334085627474.0, 0.0, 0.0),
    SeriesTerm(1458227.0, 3.6042605, 3340.6124267),
    SeriesTerm(164901.0, 3.926313, 6681.224853),
    SeriesTerm(19963.0, 4.26594, 10021.83728),
    SeriesTerm(3452.0, 4.7321, 3.5231),
    SeriesTerm(2485.0, 4.6128, 13362.4497),
    SeriesTerm(842.0, 4.459, 2281.230),
    SeriesTerm(538.0, 5.016, 398.149),
    SeriesTerm(521.0, 4.994, 3344.136),
    SeriesTerm(433.0, 2.561, 191.448),
    SeriesTerm(430.0, 5.316, 155.420),
    SeriesTerm(382.0, 3.539, 796.298),
    SeriesTerm(314.0, 4.963, 16703.062),
    SeriesTerm(283.0, 3.160, 2544.314),
    SeriesTerm(206.0, 4.569, 2146.165),
    SeriesTerm(169.0, 1.329, 3337.089),
    SeriesTerm(158.0, 4.185, 1751.540),
    SeriesTerm(134.0, 2.233, 0.980),
    SeriesTerm(134.0, 5.974, 1748.016),
    SeriesTerm(118.0, 6.024, 6151.534),
    SeriesTerm(117.0, 2.213, 1059.382),
    SeriesTerm(114.0, 2.129, 1194.447),
    SeriesTerm(114.0, 5.428, 3738.761),
    SeriesTerm(91.0, 1.10, 1349.87),
    SeriesTerm(85.0, 3.91, 553.57),
    SeriesTerm(83.0, 5.30, 6684.75),
    SeriesTerm(81.0, 4.43, 529.69),
    SeriesTerm(80.0, 2.25, 8962.46),
    SeriesTerm(72.0, 5.34, 801.82),
];

const L2: &[SeriesTerm] = &[
    SeriesTerm(58016.0, 2.04979, 3340.61243),
    SeriesTerm(54188.0, 0.0, 0.0),
    SeriesTerm(13908.0, 2.45742, 6681.22485),
    SeriesTerm(2465.0, 2.8000, 10021.8373),
    SeriesTerm(398.0, 3.141, 13362.450),
    SeriesTerm(222.0, 3.194, 3.523),
    SeriesTerm(121.0, 0.543, 155.420),
    SeriesTerm(62.0, 3.49, 16703.06),
    SeriesTerm(54.0, 3.54, 3344.14),
    SeriesTerm(34.0, 6.00, 2281.23),
    SeriesTerm(32.0, 4.14, 191.45),
    SeriesTerm(30.0, 2.00, 796.30),
    SeriesTerm(23.0, 4.33, 242.73),
    SeriesTerm(22.0, 3.45, 398.15),
    SeriesTerm(20.0, 5.42, 553.57),
    SeriesTerm(16.0, 0.66, 0.98),
    SeriesTerm(16.0, 6.11, 2146.17),
    SeriesTerm(16.0, 1.22, 1748.02),
    SeriesTerm(15.0, 6.10, 3185.19),
    SeriesTerm(14.0, 4.02, 951.72),
    SeriesTerm(14.0, 2.62, 1349.87),
    SeriesTerm(13.0, 0.60, 1194.45),
    SeriesTerm(12.0, 3.86, 6684.75),
    SeriesTerm(11.0, 4.72, 2544.31),
    SeriesTerm(10.0, 0.25, 382.90),
    SeriesTerm(9.0, 0.68, 1059.38),
    SeriesTerm(9.0, 3.83, 20043.67),
    SeriesTerm(9.0, 3.88, 3738.76),
    SeriesTerm(8.0, 5.46, 1751.54),
    SeriesTerm(7.0, 2.58, 3149.16),
    SeriesTerm(7.0, 2.38, 4136.91),
    SeriesTerm(6.0, 5.48, 1592.60),
    SeriesTerm(6.0, 2.34, 3097.88),
];

const L3: &[SeriesTerm] = &[
    SeriesTerm(1482.0, 0.4443, 3340.6124),
    SeriesTerm(662.0, 0.885, 6681.225),
    SeriesTerm(188.0, 1.288, 10021.837),
    SeriesTerm(41.0, 1.65, 13362.45),
    SeriesTerm(26.0, 0.0, 0.0),
    SeriesTerm(23.0, 2.05, 155.42),
    SeriesTerm(10.0, 1.58, 3.52),
    SeriesTerm(8.0, 2.00, 16703.06),
    SeriesTerm(5.0, 2.82, 242.73),
    SeriesTerm(4.0, 2.02, 3344.14),
    SeriesTerm(3.0, 4.59, 3185.19),
    SeriesTerm(3.0, 0.65, 553.57),
];

const L4: &[SeriesTerm] = &[
    SeriesTerm(114.0, 3.1416, 0.0),
    SeriesTerm(29.0, 5.64, 6681.22),
    SeriesTerm(24.0, 5.14, 3340.61),
    SeriesTerm(11.0, 6.03, 10021.84),
    SeriesTerm(3.0, 0.13, 13362.45),
    SeriesTerm(3.0, 3.56, 155.42),
    SeriesTerm(1.0, 0.49, 16703.06),
    SeriesTerm(1.0, 1.32, 242.73),
];

const L5: &[SeriesTerm] = &[
    SeriesTerm(1.0, 3.14, 0.0),
    SeriesTerm(1.0, 4.04, 6681.22),
];

const B0: &[SeriesTerm] = &[
    SeriesTerm(3197135.0, 3.7683204, 3340.6124267),
    SeriesTerm(298033.0, 4.106170, 6681.224853),
    SeriesTerm(289105.0, 0.0, 0.0),
    SeriesTerm(31366.0, 4.44651, 10021.83728),
    SeriesTerm(3484.0, 4.7881, 13362.4497),
    SeriesTerm(443.0, 5.026, 3344.136),
    SeriesTerm(443.0, 5.652, 3337.089),
    SeriesTerm(399.0, 5.131, 16703.062),
    SeriesTerm(293.0, 3.793, 2281.230),
    SeriesTerm(182.0, 6.136, 6151.534),
    SeriesTerm(163.0, 4.264, 529.691),
    SeriesTerm(160.0, 2.232, 1059.382),
    SeriesTerm(149.0, 2.165, 5621.843),
    SeriesTerm(143.0, 1.182, 3340.595),
    SeriesTerm(143.0, 3.213, 3340.630),
    SeriesTerm(139.0, 2.418, 8962.455),
];

const B1: &[SeriesTerm] = &[
    SeriesTerm(350069.0, 5.368478, 3340.612427),
    SeriesTerm(14116.0, 3.14159, 0.0),
    SeriesTerm(9671.0, 5.4788, 6681.2249),
    SeriesTerm(1472.0, 3.2021, 10021.8373),
    SeriesTerm(426.0, 3.408, 13362.450),
    SeriesTerm(102.0, 0.776, 3337.089),
    SeriesTerm(79.0, 3.72, 16703.06),
    SeriesTerm(33.0, 3.46, 5621.84),
    SeriesTerm(26.0, 2.48, 2281.23),
];

const B2: &[SeriesTerm] = &[
    SeriesTerm(16727.0, 0.60221, 3340.61243),
    SeriesTerm(4987.0, 3.1416, 0.0),
    SeriesTerm(302.0, 5.559, 6681.225),
    SeriesTerm(26.0, 1.90, 13362.45),
    SeriesTerm(21.0, 0.92, 10021.84),
    SeriesTerm(12.0, 2.24, 3340.63),
    SeriesTerm(8.0, 2.25, 16703.06),
];

const B3: &[SeriesTerm] = &[
    SeriesTerm(607.0, 1.981, 3340.613),
    SeriesTerm(43.0, 0.0, 0.0),
    SeriesTerm(14.0, 1.80, 6681.22),
    SeriesTerm(3.0, 3.45, 10021.84),
];

const B4: &[SeriesTerm] = &[
    SeriesTerm(13.0, 0.0, 0.0),
    SeriesTerm(11.0, 3.46, 3340.61),
    SeriesTerm(1.0, 0.50, 6681.22),
];

const R0: &[SeriesTerm] = &[
    SeriesTerm(153033488.0, 0.0, 0.0),
    SeriesTerm(14184953.0, 3.47971284, 3340.61242670),
    SeriesTerm(660776.0, 3.817834, 6681.224853),
    SeriesTerm(46179.0, 4.15595, 10021.83728),
    SeriesTerm(8110.0, 5.5596, 2810.9215),
    SeriesTerm(7485.0, 1.7724, 5621.8429),
    SeriesTerm(5523.0, 1.3644, 2281.2305),
    SeriesTerm(3825.0, 4.4941, 13362.4497),
    SeriesTerm(2484.0, 4.9255, 2942.4634),
    SeriesTerm(2307.0, 0.0908, 2544.3144),
    SeriesTerm(1999.0, 5.3606, 3337.0893),
    SeriesTerm(1960.0, 4.7425, 3344.1355),
    SeriesTerm(1167.0, 2.1126, 5092.1520),
    SeriesTerm(1103.0, 5.0091, 398.1490),
    SeriesTerm(992.0, 5.839, 6151.534),
    SeriesTerm(899.0, 4.408, 529.691),
    SeriesTerm(807.0, 2.102, 1059.382),
    SeriesTerm(798.0, 3.448, 796.298),
    SeriesTerm(741.0, 1.499, 2146.165),
    SeriesTerm(726.0, 1.245, 8432.764),
    SeriesTerm(692.0, 2.134, 8962.455),
    SeriesTerm(633.0, 0.894, 3340.595),
    SeriesTerm(633.0, 2.924, 3340.630),
    SeriesTerm(630.0, 1.287, 1751.540),
    SeriesTerm(574.0, 0.829, 2914.014),
    SeriesTerm(526.0, 5.383, 3738.761),
    SeriesTerm(473.0, 5.199, 3127.313),
    SeriesTerm(348.0, 4.832, 16703.062),
    SeriesTerm(284.0, 2.907, 3532.061),
    SeriesTerm(280.0, 5.257, 6283.076),
    SeriesTerm(276.0, 1.218, 6254.627),
    SeriesTerm(275.0, 2.908, 1748.016),
    SeriesTerm(270.0, 3.764, 5884.927),
    SeriesTerm(239.0, 2.037, 1194.447),
    SeriesTerm(234.0, 5.105, 5486.778),
    SeriesTerm(228.0, 3.255, 6872.673),
    SeriesTerm(223.0, 4.199, 3149.164),
    SeriesTerm(219.0, 5.583, 191.448),
    SeriesTerm(208.0, 5.255, 3340.545),
    SeriesTerm(208.0, 4.846, 3340.680),
    SeriesTerm(186.0, 5.699, 6677.702),
    SeriesTerm(183.0, 5.081, 6684.748),
    SeriesTerm(179.0, 4.184, 3333.499),
    SeriesTerm(176.0, 5.953, 3870.303),
    SeriesTerm(164.0, 3.799, 4136.910),
];

const R1: &[SeriesTerm] = &[
    SeriesTerm(1107433.0, 2.0325052, 3340.6124267),
    SeriesTerm(103176.0, 2.370718, 6681.224853),
    SeriesTerm(12877.0, 0.0, 0.0),
    SeriesTerm(10816.0, 2.70888, 10021.83728),
    SeriesTerm(1195.0, 3.0470, 13362.4497),
    SeriesTerm(439.0, 2.888, 2281.230),
    SeriesTerm(396.0, 3.423, 3344.136),
    SeriesTerm(183.0, 1.584, 2544.314),
    SeriesTerm(136.0, 3.385, 16703.062),
    SeriesTerm(128.0, 6.043, 3337.089),
    SeriesTerm(128.0, 0.630, 1059.382),
    SeriesTerm(127.0, 1.954, 796.298),
    SeriesTerm(118.0, 2.998, 2146.165),
    SeriesTerm(88.0, 3.42, 398.15),
    SeriesTerm(83.0, 3.86, 3738.76),
    SeriesTerm(76.0, 4.45, 6151.53),
    SeriesTerm(72.0, 2.76, 529.69),
    SeriesTerm(67.0, 2.55, 1751.54),
    SeriesTerm(66.0, 4.41, 1748.02),
    SeriesTerm(58.0, 0.54, 1194.45),
    SeriesTerm(54.0, 0.68, 8962.46),
    SeriesTerm(51.0, 3.73, 6684.75),
    SeriesTerm(49.0, 5.73, 3340.60),
    SeriesTerm(49.0, 1.48, 3340.63),
    SeriesTerm(48.0, 2.58, 3149.16),
    SeriesTerm(48.0, 2.29, 2914.01),
    SeriesTerm(39.0, 2.32, 4136.91),
];

const R2: &[SeriesTerm] = &[
    SeriesTerm(44242.0, 0.47931, 3340.61243),
    SeriesTerm(8138.0, 0.8700, 6681.2249),
    SeriesTerm(1275.0, 1.2259, 10021.8373),
    SeriesTerm(187.0, 1.573, 13362.450),
    SeriesTerm(52.0, 3.14, 0.0),
    SeriesTerm(41.0, 1.97, 3344.14),
    SeriesTerm(27.0, 1.92, 3337.09),
    SeriesTerm(18.0, 4.43, 2281.23),
    SeriesTerm(17.0, 1.45, 16703.06),
];

const R3: &[SeriesTerm] = &[
    SeriesTerm(1113.0, 5.1499, 3340.6124),
    SeriesTerm(424.0, 5.613, 6681.225),
    SeriesTerm(100.0, 5.997, 10021.837),
    SeriesTerm(20.0, 0.08, 13362.45),
    SeriesTerm(5.0, 3.14, 0.0),
    SeriesTerm(3.0, 0.43, 16703.06),
];

const R4: &[SeriesTerm] = &[
    SeriesTerm(20.0, 3.58, 3340.61),
    SeriesTerm(16.0, 4.05, 6681.22),
    SeriesTerm(6.0, 4.46, 10021.84),
    SeriesTerm(2.0, 4.84, 13362.45),
];

pub const MARS: Vsop87Body = Vsop87Body {
    longitude: SeriesTable::new(&[L0, L1, L2, L3, L4, L5], 1e8),
    latitude: SeriesTable::new(&[B0, B1, B2, B3, B4], 1e8),
    radius: SeriesTable::new(&[R0, R1, R2, R3, R4], 1e8),
};
