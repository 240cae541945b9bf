//! Truncated VSOP87 series for Neptune: heliocentric longitude `L`, latitude `B` and radius `R`,
//! mean ecliptic and equinox of date. Amplitudes are in units of 1e-8 (radians for `L` and `B`, AU for `R`).

use crate::series::{SeriesTable, SeriesTerm};

use super::Vsop87Body;

const L0: &[SeriesTerm] = &[
    SeriesTerm(531188633.0, 0.0, 0.0),
    SeriesTerm(1798476.0, 2.9010127, 38.1330356),
    SeriesTerm(1019728.0, 0.4858092, 1.4844727),
    SeriesTerm(124532.0, 4.830081, 36.648563),
    SeriesTerm(42064.0, 5.41055, 2.96895),
    SeriesTerm(37715.0, 6.09222, 35.16409),
    SeriesTerm(33785.0, 1.24489, 76.26607),
    SeriesTerm(16483.0, 0.00008, 491.55793),
    SeriesTerm(9199.0, 4.9375, 39.6175),
    SeriesTerm(8994.0, 0.2746, 175.1661),
    SeriesTerm(4216.0, 1.9871, 73.2971),
    SeriesTerm(3365.0, 1.0359, 33.6796),
    SeriesTerm(2285.0, 4.2061, 4.4534),
    SeriesTerm(1434.0, 2.7834, 74.7816),
    SeriesTerm(900.0, 2.076, 109.946),
    SeriesTerm(745.0, 3.190, 71.813),
    SeriesTerm(506.0, 5.748, 114.399),
    SeriesTerm(400.0, 0.350, 1021.249),
    SeriesTerm(345.0, 3.462, 41.102),
    SeriesTerm(340.0, 3.304, 77.751),
    SeriesTerm(323.0, 2.248, 32.165),
    SeriesTerm(306.0, 0.497, 0.521),
    SeriesTerm(287.0, 4.505, 0.048),
    SeriesTerm(282.0, 2.246, 146.594),
    SeriesTerm(267.0, 4.889, 0.963),
    SeriesTerm(252.0, 5.782, 388.465),
    SeriesTerm(245.0, 1.247, 9.561),
    SeriesTerm(233.0, 2.505, 137.033),
    SeriesTerm(227.0, 1.797, 453.425),
    SeriesTerm(170.0, 3.324, 108.461),
    SeriesTerm(151.0, 2.192, 33.940),
    SeriesTerm(150.0, 2.997, 5.938),
    SeriesTerm(148.0, 0.859, 111.430),
    SeriesTerm(119.0, 3.677, 2.448),
    SeriesTerm(109.0, 2.416, 183.243),
    SeriesTerm(103.0, 0.041, 0.261),
    SeriesTerm(103.0, 4.404, 70.328),
    SeriesTerm(102.0, 5.705, 0.112),
];

const L1: &[SeriesTerm] = &[
    SeriesTerm(3837687717.0, 0.0, 0.0),
    SeriesTerm(16604.0, 4.86319, 1.48447),
    SeriesTerm(15807.0, 2.27923, 38.13304),
    SeriesTerm(3335.0, 3.6820, 76.2661),
    SeriesTerm(1306.0, 3.6732, 2.9689),
    SeriesTerm(605.0, 1.505, 35.164),
    SeriesTerm(179.0, 3.453, 39.618),
    SeriesTerm(107.0, 2.451, 4.453),
    SeriesTerm(106.0, 2.755, 33.680),
    SeriesTerm(73.0, 5.49, 36.65),
    SeriesTerm(57.0, 1.86, 114.40),
    SeriesTerm(57.0, 5.22, 0.52),
    SeriesTerm(35.0, 4.52, 74.78),
    SeriesTerm(32.0, 5.90, 77.75),
    SeriesTerm(30.0, 3.67, 388.47),
    SeriesTerm(29.0, 5.17, 9.56),
    SeriesTerm(29.0, 5.17, 2.45),
    SeriesTerm(26.0, 5.25, 168.05),
];

const L2: &[SeriesTerm] = &[
    SeriesTerm(53893.0, 0.0, 0.0),
    SeriesTerm(296.0, 1.855, 1.484),
    SeriesTerm(281.0, 1.191, 38.133),
    SeriesTerm(270.0, 5.721, 76.266),
    SeriesTerm(23.0, 1.21, 2.97),
    SeriesTerm(9.0, 4.43, 35.16),
    SeriesTerm(7.0, 0.54, 2.45),
];

const L3: &[SeriesTerm] = &[
    SeriesTerm(31.0, 0.0, 0.0),
    SeriesTerm(15.0, 1.35, 76.27),
    SeriesTerm(12.0, 6.04, 1.48),
    SeriesTerm(12.0, 6.11, 38.13),
];

const L4: &[SeriesTerm] = &[
    SeriesTerm(114.0, 3.142, 0.0),
];

const B0: &[SeriesTerm] = &[
    SeriesTerm(3088623.0, 1.4410437, 38.1330356),
    SeriesTerm(27780.0, 5.91272, 76.26607),
    SeriesTerm(27624.0, 0.0, 0.0),
    SeriesTerm(15448.0, 3.50877, 39.61751),
    SeriesTerm(15355.0, 2.52124, 36.64856),
    SeriesTerm(2000.0, 1.5100, 74.7816),
    SeriesTerm(1968.0, 4.3778, 1.4845),
    SeriesTerm(1015.0, 3.2156, 35.1641),
    SeriesTerm(606.0, 2.802, 73.297),
    SeriesTerm(595.0, 2.129, 41.102),
    SeriesTerm(589.0, 3.187, 2.969),
    SeriesTerm(402.0, 4.169, 114.399),
    SeriesTerm(280.0, 1.682, 77.751),
    SeriesTerm(262.0, 3.767, 213.299),
    SeriesTerm(254.0, 3.271, 453.425),
    SeriesTerm(206.0, 4.257, 529.691),
    SeriesTerm(140.0, 3.530, 137.033),
];

const B1: &[SeriesTerm] = &[
    SeriesTerm(227279.0, 3.807931, 38.133036),
    SeriesTerm(1803.0, 1.9758, 76.2661),
    SeriesTerm(1433.0, 3.1416, 0.0),
    SeriesTerm(1386.0, 4.8256, 36.6486),
    SeriesTerm(1073.0, 6.0805, 39.6175),
    SeriesTerm(148.0, 3.858, 74.782),
    SeriesTerm(136.0, 0.478, 1.484),
    SeriesTerm(70.0, 6.19, 35.16),
    SeriesTerm(52.0, 5.05, 73.30),
    SeriesTerm(43.0, 0.31, 114.40),
    SeriesTerm(37.0, 4.89, 41.10),
    SeriesTerm(37.0, 5.76, 2.97),
    SeriesTerm(26.0, 5.22, 213.30),
];

const B2: &[SeriesTerm] = &[
    SeriesTerm(9691.0, 5.5712, 38.1330),
    SeriesTerm(79.0, 3.63, 76.27),
    SeriesTerm(72.0, 0.45, 36.65),
    SeriesTerm(59.0, 3.14, 0.0),
    SeriesTerm(30.0, 1.61, 39.62),
    SeriesTerm(6.0, 5.61, 74.78),
];

const B3: &[SeriesTerm] = &[
    SeriesTerm(273.0, 1.017, 38.133),
    SeriesTerm(2.0, 0.0, 0.0),
    SeriesTerm(2.0, 2.37, 36.65),
    SeriesTerm(2.0, 5.33, 39.62),
];

const B4: &[SeriesTerm] = &[
    SeriesTerm(6.0, 2.67, 38.13),
];

const R0: &[SeriesTerm] = &[
    SeriesTerm(3007013206.0, 0.0, 0.0),
    SeriesTerm(27062259.0, 1.32999459, 38.13303564),
    SeriesTerm(1691764.0, 3.2518614, 36.6485629),
    SeriesTerm(807831.0, 5.185928, 1.484473),
    SeriesTerm(537761.0, 4.521139, 35.164090),
    SeriesTerm(495726.0, 1.571057, 491.557929),
    SeriesTerm(274572.0, 1.845523, 175.166060),
    SeriesTerm(135134.0, 3.372206, 39.617508),
    SeriesTerm(121802.0, 5.797544, 76.266071),
    SeriesTerm(100895.0, 0.377027, 73.297126),
    SeriesTerm(69792.0, 3.79617, 2.96895),
    SeriesTerm(46688.0, 5.74938, 33.67962),
    SeriesTerm(24594.0, 0.50802, 109.94569),
    SeriesTerm(16939.0, 1.59422, 71.81265),
    SeriesTerm(14230.0, 1.07786, 74.78160),
    SeriesTerm(12012.0, 1.92062, 1021.24889),
    SeriesTerm(8395.0, 0.6782, 146.5943),
    SeriesTerm(7572.0, 1.0715, 388.4652),
    SeriesTerm(5721.0, 2.5906, 4.4534),
    SeriesTerm(4840.0, 1.9069, 41.1020),
    SeriesTerm(4483.0, 2.9057, 529.6910),
    SeriesTerm(4421.0, 1.7499, 108.4612),
    SeriesTerm(4354.0, 0.6799, 32.1645),
    SeriesTerm(4270.0, 3.4134, 453.4249),
    SeriesTerm(3381.0, 0.8481, 183.2428),
    SeriesTerm(2881.0, 1.9860, 137.0330),
    SeriesTerm(2879.0, 3.6742, 350.3321),
    SeriesTerm(2636.0, 3.0976, 213.2991),
    SeriesTerm(2530.0, 5.7984, 490.0735),
    SeriesTerm(2523.0, 0.4863, 493.0424),
    SeriesTerm(2306.0, 2.8096, 70.3282),
    SeriesTerm(2087.0, 0.6186, 33.9402),
];

const R1: &[SeriesTerm] = &[
    SeriesTerm(236339.0, 0.704980, 38.133036),
    SeriesTerm(13220.0, 3.32015, 1.48447),
    SeriesTerm(8622.0, 6.2163, 35.1641),
    SeriesTerm(2702.0, 1.8814, 39.6175),
    SeriesTerm(2155.0, 2.0943, 2.9689),
    SeriesTerm(2153.0, 5.1687, 76.2661),
    SeriesTerm(1603.0, 0.0, 0.0),
    SeriesTerm(1464.0, 1.1842, 33.6796),
    SeriesTerm(1136.0, 3.9189, 36.6486),
    SeriesTerm(898.0, 5.241, 388.465),
    SeriesTerm(790.0, 0.533, 168.053),
    SeriesTerm(760.0, 0.021, 182.280),
    SeriesTerm(607.0, 1.077, 1021.249),
    SeriesTerm(572.0, 3.401, 484.444),
    SeriesTerm(561.0, 2.887, 498.671),
];

const R2: &[SeriesTerm] = &[
    SeriesTerm(4247.0, 5.8991, 38.1330),
    SeriesTerm(218.0, 0.346, 1.484),
    SeriesTerm(163.0, 2.239, 491.558),
    SeriesTerm(156.0, 4.594, 39.618),
    SeriesTerm(127.0, 2.848, 35.164),
];

const R3: &[SeriesTerm] = &[
    SeriesTerm(166.0, 4.552, 38.133),
];

pub const NEPTUNE: Vsop87Body = Vsop87Body {
    longitude: SeriesTable::new(&[L0, L1, L2, L3, L4], 1e8),
    latitude: SeriesTable::new(&[B0, B1, B2, B3, B4], 1e8),
    radius: SeriesTable::new(&[R0, R1, R2, R3], 1e8),
};
