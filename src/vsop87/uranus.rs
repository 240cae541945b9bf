//! Truncated VSOP87 series for Uranus: heliocentric longitude `L`, latitude `B` and radius `R`,
//! mean ecliptic and equinox of date. Amplitudes are in units of 1e-8 (radians for `L` and `B`, AU for `R`).

use crate::series::{SeriesTable, SeriesTerm};

use super::Vsop87Body;

const L0: &[SeriesTerm] = &[
    SeriesTerm(548129294.0, 0.0, 0.0),
    SeriesTerm(9260408.0, 0.8910642, 74.7815986),
    SeriesTerm(1504248.0, 3.6271926, 1.4844727),
    SeriesTerm(365982.0, 1.899622, 73.297126),
    SeriesTerm(272328.0, 3.358237, 149.563197),
    SeriesTerm(70328.0, 5.39254, 63.73590),
    SeriesTerm(68893.0, 6.09292, 76.26607),
    SeriesTerm(61999.0, 2.26952, 2.96895),
    SeriesTerm(61951.0, 2.85099, 11.04570),
    SeriesTerm(26469.0, 3.14152, 71.81265),
    SeriesTerm(25711.0, 6.11380, 454.90937),
    SeriesTerm(21079.0, 4.36059, 148.07872),
    SeriesTerm(17819.0, 1.74437, 36.64856),
    SeriesTerm(14613.0, 4.73732, 3.93215),
    SeriesTerm(11163.0, 5.82682, 224.34480),
    SeriesTerm(10998.0, 0.48865, 138.51750),
    SeriesTerm(9527.0, 2.9552, 35.1641),
    SeriesTerm(7546.0, 5.2363, 109.9457),
    SeriesTerm(4220.0, 3.2333, 70.8494),
    SeriesTerm(4052.0, 2.2775, 151.0477),
    SeriesTerm(3490.0, 5.4831, 146.5943),
    SeriesTerm(3355.0, 1.0655, 4.4534),
    SeriesTerm(3144.0, 4.7520, 77.7505),
    SeriesTerm(2927.0, 4.6290, 9.5612),
    SeriesTerm(2922.0, 5.3524, 85.8273),
    SeriesTerm(2273.0, 4.3660, 70.3282),
    SeriesTerm(2149.0, 0.6075, 38.1330),
    SeriesTerm(2051.0, 1.5177, 0.1119),
    SeriesTerm(1992.0, 4.9244, 277.0350),
    SeriesTerm(1667.0, 3.6274, 380.1278),
    SeriesTerm(1533.0, 2.5859, 52.6902),
    SeriesTerm(1376.0, 2.0428, 65.2204),
    SeriesTerm(1372.0, 4.1964, 111.4302),
    SeriesTerm(1284.0, 3.1135, 202.2534),
    SeriesTerm(1282.0, 0.5427, 222.8603),
    SeriesTerm(1244.0, 0.9161, 2.4477),
    SeriesTerm(1221.0, 0.1990, 108.4612),
    SeriesTerm(1151.0, 4.1790, 33.6796),
    SeriesTerm(1150.0, 0.9334, 3.1814),
    SeriesTerm(1090.0, 1.7750, 12.5302),
    SeriesTerm(1072.0, 0.2356, 62.2514),
    SeriesTerm(946.0, 1.192, 127.472),
    SeriesTerm(708.0, 5.183, 213.299),
    SeriesTerm(653.0, 0.966, 78.714),
    SeriesTerm(628.0, 0.182, 984.600),
    SeriesTerm(607.0, 5.432, 529.691),
    SeriesTerm(559.0, 3.358, 0.521),
    SeriesTerm(524.0, 2.013, 299.126),
    SeriesTerm(483.0, 2.106, 0.963),
    SeriesTerm(471.0, 1.407, 184.727),
    SeriesTerm(467.0, 0.415, 145.110),
    SeriesTerm(434.0, 5.521, 183.243),
    SeriesTerm(405.0, 5.987, 8.077),
    SeriesTerm(399.0, 0.338, 415.552),
    SeriesTerm(396.0, 5.870, 351.817),
    SeriesTerm(379.0, 2.350, 56.622),
    SeriesTerm(310.0, 5.833, 145.631),
    SeriesTerm(300.0, 5.644, 22.091),
    SeriesTerm(294.0, 5.839, 39.618),
    SeriesTerm(252.0, 1.637, 221.376),
    SeriesTerm(249.0, 4.746, 225.829),
    SeriesTerm(239.0, 2.350, 137.033),
    SeriesTerm(224.0, 0.516, 84.343),
    SeriesTerm(223.0, 2.843, 0.261),
    SeriesTerm(220.0, 1.922, 67.668),
    SeriesTerm(217.0, 6.142, 5.938),
    SeriesTerm(216.0, 4.778, 340.771),
    SeriesTerm(208.0, 5.580, 68.844),
    SeriesTerm(202.0, 1.297, 0.048),
    SeriesTerm(199.0, 0.956, 152.532),
    SeriesTerm(194.0, 1.832, 146.381),
    SeriesTerm(193.0, 5.918, 10.295),
];

const L1: &[SeriesTerm] = &[
    SeriesTerm(7502543122.0, 0.0, 0.0),
    SeriesTerm(154458.0, 5.242017, 74.781599),
    SeriesTerm(24456.0, 1.71256, 1.48447),
    SeriesTerm(9258.0, 0.4284, 11.0457),
    SeriesTerm(8266.0, 1.5022, 63.7359),
    SeriesTerm(7842.0, 1.3198, 149.5632),
    SeriesTerm(3899.0, 0.4648, 3.9322),
    SeriesTerm(2284.0, 4.1737, 76.2661),
    SeriesTerm(1927.0, 0.5301, 2.9689),
    SeriesTerm(1233.0, 1.5863, 70.8494),
    SeriesTerm(791.0, 5.436, 3.181),
    SeriesTerm(767.0, 1.996, 73.297),
    SeriesTerm(482.0, 2.984, 85.827),
    SeriesTerm(450.0, 4.138, 138.517),
    SeriesTerm(446.0, 3.723, 224.345),
    SeriesTerm(427.0, 4.731, 71.813),
    SeriesTerm(354.0, 2.583, 148.079),
    SeriesTerm(348.0, 2.454, 9.561),
    SeriesTerm(317.0, 5.579, 52.690),
    SeriesTerm(206.0, 2.363, 2.448),
    SeriesTerm(189.0, 4.202, 56.622),
    SeriesTerm(184.0, 0.284, 151.048),
    SeriesTerm(180.0, 5.684, 12.530),
    SeriesTerm(171.0, 3.001, 78.714),
    SeriesTerm(158.0, 2.909, 0.963),
    SeriesTerm(155.0, 5.591, 4.453),
    SeriesTerm(154.0, 4.652, 35.164),
    SeriesTerm(152.0, 2.942, 77.751),
    SeriesTerm(143.0, 2.590, 62.251),
    SeriesTerm(121.0, 4.148, 127.472),
    SeriesTerm(116.0, 3.732, 65.220),
    SeriesTerm(102.0, 4.188, 145.631),
    SeriesTerm(102.0, 6.034, 0.112),
    SeriesTerm(88.0, 3.99, 18.16),
    SeriesTerm(88.0, 6.16, 202.25),
    SeriesTerm(81.0, 2.64, 22.09),
    SeriesTerm(72.0, 6.05, 70.33),
    SeriesTerm(69.0, 4.05, 77.96),
    SeriesTerm(59.0, 3.70, 67.67),
    SeriesTerm(47.0, 3.54, 351.82),
    SeriesTerm(44.0, 5.91, 7.11),
    SeriesTerm(43.0, 5.72, 5.42),
    SeriesTerm(39.0, 4.92, 222.86),
    SeriesTerm(36.0, 5.90, 33.68),
    SeriesTerm(36.0, 3.29, 8.08),
    SeriesTerm(36.0, 3.33, 71.60),
    SeriesTerm(35.0, 5.08, 38.13),
    SeriesTerm(31.0, 5.62, 984.60),
    SeriesTerm(31.0, 5.50, 59.80),
    SeriesTerm(31.0, 5.46, 160.61),
    SeriesTerm(30.0, 1.66, 447.80),
    SeriesTerm(29.0, 1.15, 462.02),
    SeriesTerm(29.0, 4.52, 84.34),
    SeriesTerm(27.0, 5.54, 131.40),
    SeriesTerm(27.0, 6.15, 299.13),
    SeriesTerm(26.0, 4.99, 137.03),
    SeriesTerm(25.0, 5.74, 380.13),
];

const L2: &[SeriesTerm] = &[
    SeriesTerm(53033.0, 0.0, 0.0),
    SeriesTerm(2358.0, 2.2601, 74.7816),
    SeriesTerm(769.0, 4.526, 11.046),
    SeriesTerm(552.0, 3.258, 63.736),
    SeriesTerm(542.0, 2.276, 3.932),
    SeriesTerm(529.0, 4.923, 1.484),
    SeriesTerm(258.0, 3.691, 3.181),
    SeriesTerm(239.0, 5.858, 149.563),
    SeriesTerm(182.0, 6.218, 70.849),
    SeriesTerm(54.0, 1.44, 76.27),
    SeriesTerm(49.0, 6.03, 56.62),
    SeriesTerm(45.0, 3.91, 2.45),
    SeriesTerm(45.0, 0.81, 85.83),
    SeriesTerm(38.0, 1.78, 52.69),
    SeriesTerm(37.0, 4.46, 2.97),
    SeriesTerm(33.0, 0.86, 9.56),
    SeriesTerm(29.0, 5.10, 73.30),
    SeriesTerm(24.0, 2.11, 18.16),
    SeriesTerm(22.0, 5.99, 138.52),
    SeriesTerm(22.0, 4.82, 78.71),
    SeriesTerm(21.0, 2.40, 77.96),
    SeriesTerm(21.0, 2.17, 224.34),
    SeriesTerm(17.0, 2.54, 145.63),
    SeriesTerm(17.0, 3.47, 12.53),
    SeriesTerm(12.0, 0.02, 22.09),
    SeriesTerm(11.0, 0.08, 127.47),
    SeriesTerm(10.0, 5.16, 71.60),
    SeriesTerm(10.0, 4.46, 62.25),
    SeriesTerm(9.0, 4.26, 7.11),
    SeriesTerm(8.0, 5.50, 67.67),
    SeriesTerm(7.0, 1.25, 5.42),
    SeriesTerm(6.0, 3.36, 447.80),
    SeriesTerm(6.0, 5.45, 65.22),
    SeriesTerm(6.0, 4.52, 151.05),
    SeriesTerm(6.0, 5.73, 462.02),
];

const L3: &[SeriesTerm] = &[
    SeriesTerm(121.0, 0.024, 74.782),
    SeriesTerm(68.0, 4.12, 3.93),
    SeriesTerm(53.0, 2.39, 11.05),
    SeriesTerm(46.0, 0.0, 0.0),
    SeriesTerm(45.0, 2.04, 3.18),
    SeriesTerm(44.0, 2.96, 1.48),
    SeriesTerm(25.0, 4.89, 63.74),
    SeriesTerm(21.0, 4.55, 70.85),
    SeriesTerm(20.0, 2.31, 149.56),
    SeriesTerm(9.0, 1.58, 56.62),
    SeriesTerm(4.0, 0.23, 18.16),
    SeriesTerm(4.0, 5.39, 76.27),
    SeriesTerm(4.0, 0.95, 77.96),
    SeriesTerm(3.0, 4.98, 85.83),
    SeriesTerm(3.0, 4.13, 52.69),
    SeriesTerm(3.0, 0.37, 78.71),
    SeriesTerm(2.0, 0.86, 145.63),
    SeriesTerm(2.0, 5.66, 9.56),
];

const L4: &[SeriesTerm] = &[
    SeriesTerm(114.0, 3.142, 0.0),
    SeriesTerm(6.0, 4.58, 74.78),
    SeriesTerm(3.0, 0.35, 11.05),
    SeriesTerm(1.0, 3.42, 56.62),
];

const B0: &[SeriesTerm] = &[
    SeriesTerm(1346278.0, 2.6187781, 74.7815986),
    SeriesTerm(62341.0, 5.08111, 149.56320),
    SeriesTerm(61601.0, 3.14159, 0.0),
    SeriesTerm(9964.0, 1.6160, 76.2661),
    SeriesTerm(9926.0, 0.5763, 73.2971),
    SeriesTerm(3259.0, 1.2612, 224.3448),
    SeriesTerm(2972.0, 2.2437, 1.4845),
    SeriesTerm(2010.0, 6.0555, 148.0787),
    SeriesTerm(1522.0, 0.2796, 63.7359),
    SeriesTerm(924.0, 4.038, 151.048),
    SeriesTerm(761.0, 6.140, 71.813),
    SeriesTerm(522.0, 3.321, 138.517),
    SeriesTerm(463.0, 0.743, 85.827),
    SeriesTerm(437.0, 3.381, 529.691),
    SeriesTerm(435.0, 0.341, 77.751),
    SeriesTerm(431.0, 3.554, 213.299),
    SeriesTerm(420.0, 5.213, 11.046),
    SeriesTerm(245.0, 0.788, 2.969),
    SeriesTerm(233.0, 2.257, 222.860),
    SeriesTerm(216.0, 1.591, 38.133),
    SeriesTerm(180.0, 3.725, 299.126),
    SeriesTerm(175.0, 1.236, 146.594),
    SeriesTerm(174.0, 1.937, 380.128),
    SeriesTerm(160.0, 5.336, 111.430),
    SeriesTerm(144.0, 5.962, 35.164),
    SeriesTerm(116.0, 5.739, 70.849),
    SeriesTerm(106.0, 0.941, 70.328),
    SeriesTerm(102.0, 2.619, 78.714),
];

const B1: &[SeriesTerm] = &[
    SeriesTerm(206366.0, 4.123943, 74.781599),
    SeriesTerm(8563.0, 0.3382, 149.5632),
    SeriesTerm(1726.0, 2.1219, 73.2971),
    SeriesTerm(1374.0, 0.0, 0.0),
    SeriesTerm(1369.0, 3.0686, 76.2661),
    SeriesTerm(451.0, 3.777, 1.484),
    SeriesTerm(400.0, 2.848, 224.345),
    SeriesTerm(307.0, 1.255, 148.079),
    SeriesTerm(154.0, 3.786, 63.736),
    SeriesTerm(112.0, 5.573, 151.048),
    SeriesTerm(111.0, 5.329, 138.517),
    SeriesTerm(83.0, 3.59, 71.81),
    SeriesTerm(56.0, 3.40, 85.83),
    SeriesTerm(54.0, 1.70, 77.75),
    SeriesTerm(42.0, 1.21, 11.05),
    SeriesTerm(41.0, 4.45, 78.71),
    SeriesTerm(32.0, 3.77, 222.86),
    SeriesTerm(30.0, 2.56, 2.97),
    SeriesTerm(27.0, 5.34, 213.30),
    SeriesTerm(26.0, 0.42, 380.13),
];

const B2: &[SeriesTerm] = &[
    SeriesTerm(9212.0, 5.8004, 74.7816),
    SeriesTerm(557.0, 0.0, 0.0),
    SeriesTerm(286.0, 2.177, 149.563),
    SeriesTerm(95.0, 3.84, 73.30),
    SeriesTerm(45.0, 4.88, 76.27),
    SeriesTerm(20.0, 5.46, 1.48),
    SeriesTerm(15.0, 0.88, 138.52),
    SeriesTerm(14.0, 2.85, 148.08),
    SeriesTerm(14.0, 5.07, 63.74),
    SeriesTerm(10.0, 5.00, 224.34),
    SeriesTerm(8.0, 6.27, 78.71),
];

const B3: &[SeriesTerm] = &[
    SeriesTerm(268.0, 1.251, 74.782),
    SeriesTerm(11.0, 3.14, 0.0),
    SeriesTerm(6.0, 4.01, 149.56),
    SeriesTerm(3.0, 5.78, 73.30),
];

const B4: &[SeriesTerm] = &[
    SeriesTerm(6.0, 2.85, 74.78),
];

const R0: &[SeriesTerm] = &[
    SeriesTerm(1921264848.0, 0.0, 0.0),
    SeriesTerm(88784984.0, 5.60377527, 74.78159857),
    SeriesTerm(3440836.0, 0.3283610, 73.2971259),
    SeriesTerm(2055653.0, 1.7829517, 149.5631971),
    SeriesTerm(649322.0, 4.522473, 76.266071),
    SeriesTerm(602248.0, 3.860038, 63.735898),
    SeriesTerm(496404.0, 1.401399, 454.909367),
    SeriesTerm(338526.0, 1.580027, 138.517497),
    SeriesTerm(243508.0, 1.570866, 71.812653),
    SeriesTerm(190522.0, 1.998094, 1.484473),
    SeriesTerm(161858.0, 2.791379, 148.078724),
    SeriesTerm(143706.0, 1.383686, 11.045700),
    SeriesTerm(93192.0, 0.17437, 36.64856),
    SeriesTerm(89806.0, 3.66105, 109.94569),
    SeriesTerm(71424.0, 4.24509, 224.34480),
    SeriesTerm(46677.0, 1.39977, 35.16409),
    SeriesTerm(39026.0, 3.36235, 277.03499),
    SeriesTerm(39010.0, 1.66971, 70.84945),
    SeriesTerm(36755.0, 3.88649, 146.59425),
    SeriesTerm(30349.0, 0.70100, 151.04767),
    SeriesTerm(29156.0, 3.18056, 77.75054),
    SeriesTerm(25786.0, 3.78538, 85.82730),
    SeriesTerm(25620.0, 5.25656, 380.12777),
    SeriesTerm(22637.0, 0.72519, 529.69097),
    SeriesTerm(20473.0, 2.79640, 70.32818),
    SeriesTerm(20472.0, 1.55589, 202.25340),
    SeriesTerm(17901.0, 0.55455, 2.96895),
    SeriesTerm(15503.0, 5.35405, 38.13304),
    SeriesTerm(14702.0, 4.90434, 108.46122),
    SeriesTerm(12897.0, 2.62154, 111.43016),
    SeriesTerm(12328.0, 5.96039, 127.47180),
    SeriesTerm(11959.0, 1.75044, 984.60033),
    SeriesTerm(11853.0, 0.99343, 52.69020),
    SeriesTerm(11696.0, 3.29826, 3.93215),
    SeriesTerm(11495.0, 0.43774, 65.22037),
    SeriesTerm(10793.0, 1.42105, 213.29910),
    SeriesTerm(9111.0, 4.9964, 62.2514),
    SeriesTerm(8421.0, 5.2535, 222.8603),
    SeriesTerm(8402.0, 5.0388, 415.5525),
    SeriesTerm(7449.0, 0.7949, 351.8166),
    SeriesTerm(7329.0, 3.9728, 183.2428),
    SeriesTerm(6046.0, 5.6796, 78.7138),
    SeriesTerm(5524.0, 3.1150, 9.5612),
    SeriesTerm(5445.0, 5.1058, 145.1098),
    SeriesTerm(5238.0, 2.6296, 33.6796),
    SeriesTerm(4079.0, 3.2206, 340.7709),
    SeriesTerm(3919.0, 4.2502, 39.6175),
    SeriesTerm(3802.0, 6.1099, 184.7273),
    SeriesTerm(3781.0, 3.4584, 456.3938),
    SeriesTerm(3687.0, 2.4872, 453.4249),
    SeriesTerm(3102.0, 4.1403, 219.8914),
    SeriesTerm(2963.0, 0.8298, 56.6224),
    SeriesTerm(2942.0, 0.4239, 299.1264),
    SeriesTerm(2940.0, 2.1464, 137.0330),
    SeriesTerm(2938.0, 3.6766, 140.0020),
    SeriesTerm(2865.0, 0.3100, 12.5302),
    SeriesTerm(2538.0, 4.8546, 131.4039),
    SeriesTerm(2364.0, 0.4425, 554.0700),
    SeriesTerm(2183.0, 2.9404, 305.3462),
];

const R1: &[SeriesTerm] = &[
    SeriesTerm(1479896.0, 3.6720571, 74.7815986),
    SeriesTerm(71212.0, 6.22601, 63.73590),
    SeriesTerm(68627.0, 6.13411, 149.56320),
    SeriesTerm(24060.0, 3.14159, 0.0),
    SeriesTerm(21468.0, 2.60177, 76.26607),
    SeriesTerm(20857.0, 5.24625, 11.04570),
    SeriesTerm(11405.0, 0.01848, 70.84945),
    SeriesTerm(7497.0, 0.4236, 73.2971),
    SeriesTerm(4244.0, 1.4169, 85.8273),
    SeriesTerm(3927.0, 3.1551, 71.8127),
    SeriesTerm(3578.0, 2.3116, 224.3448),
    SeriesTerm(3506.0, 2.5835, 138.5175),
    SeriesTerm(3229.0, 5.2550, 3.9322),
    SeriesTerm(3060.0, 0.1532, 1.4845),
    SeriesTerm(2564.0, 0.9808, 148.0787),
    SeriesTerm(2429.0, 3.9944, 52.6902),
    SeriesTerm(1645.0, 2.6535, 127.4718),
    SeriesTerm(1584.0, 1.4305, 78.7138),
    SeriesTerm(1508.0, 5.0600, 151.0477),
    SeriesTerm(1490.0, 2.6756, 56.6224),
    SeriesTerm(1413.0, 4.5746, 202.2534),
    SeriesTerm(1403.0, 1.3699, 77.7505),
    SeriesTerm(1228.0, 1.0470, 62.2514),
    SeriesTerm(1033.0, 0.2646, 131.4039),
    SeriesTerm(992.0, 2.172, 65.220),
    SeriesTerm(862.0, 5.055, 351.817),
    SeriesTerm(744.0, 3.076, 35.164),
    SeriesTerm(687.0, 2.499, 77.963),
    SeriesTerm(647.0, 4.473, 70.328),
    SeriesTerm(624.0, 0.863, 9.561),
    SeriesTerm(604.0, 0.907, 984.600),
    SeriesTerm(575.0, 3.231, 447.796),
    SeriesTerm(562.0, 2.718, 462.023),
    SeriesTerm(530.0, 5.917, 213.299),
    SeriesTerm(528.0, 5.151, 2.969),
];

const R2: &[SeriesTerm] = &[
    SeriesTerm(22440.0, 0.69953, 74.78160),
    SeriesTerm(4727.0, 1.6990, 63.7359),
    SeriesTerm(1682.0, 4.6483, 70.8494),
    SeriesTerm(1650.0, 3.0966, 11.0457),
    SeriesTerm(1434.0, 3.5212, 149.5632),
    SeriesTerm(770.0, 0.0, 0.0),
    SeriesTerm(500.0, 6.172, 76.266),
    SeriesTerm(461.0, 0.767, 3.932),
    SeriesTerm(390.0, 4.496, 56.622),
    SeriesTerm(390.0, 5.527, 85.827),
    SeriesTerm(292.0, 0.204, 52.690),
    SeriesTerm(287.0, 3.534, 73.297),
    SeriesTerm(273.0, 3.847, 138.517),
    SeriesTerm(220.0, 1.964, 131.404),
    SeriesTerm(216.0, 0.848, 77.963),
    SeriesTerm(205.0, 3.248, 78.714),
    SeriesTerm(149.0, 4.898, 127.472),
    SeriesTerm(129.0, 2.081, 3.181),
];

const R3: &[SeriesTerm] = &[
    SeriesTerm(1164.0, 4.7345, 74.7816),
    SeriesTerm(212.0, 3.343, 63.736),
    SeriesTerm(196.0, 2.980, 70.849),
    SeriesTerm(105.0, 0.958, 11.046),
    SeriesTerm(73.0, 1.00, 149.56),
    SeriesTerm(72.0, 0.03, 56.62),
    SeriesTerm(55.0, 2.59, 3.93),
    SeriesTerm(36.0, 5.65, 77.96),
    SeriesTerm(34.0, 3.82, 76.27),
    SeriesTerm(32.0, 3.60, 131.40),
];

const R4: &[SeriesTerm] = &[
    SeriesTerm(53.0, 3.01, 74.78),
    SeriesTerm(10.0, 1.91, 56.62),
];

pub const URANUS: Vsop87Body = Vsop87Body {
    longitude: SeriesTable::new(&[L0, L1, L2, L3, L4], 1e8),
    latitude: SeriesTable::new(&[B0, B1, B2, B3, B4], 1e8),
    radius: SeriesTable::new(&[R0, R1, R2, R3, R4], 1e8),
};
