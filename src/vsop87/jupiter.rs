//! Truncated VSOP87 series for Jupiter: heliocentric longitude `L`, latitude `B` and radius `R`,
//! mean ecliptic and equinox of date. Amplitudes are in units of 1e-8 (radians for `L` and `B`, AU for `R`).

use crate::series::{SeriesTable, SeriesTerm};

use super::Vsop87Body;

const L0: &[SeriesTerm] = &[
    SeriesTerm(59954691.0, 0.0, 0.0),
    SeriesTerm(9695899.0, 5.0619179, 529.6909651),
    SeriesTerm(573610.0, 1.444062, 7.113547),
    SeriesTerm(306389.0, 5.417347, 1059.381930),
    SeriesTerm(97178.0, 4.14265, 632.78374),
    SeriesTerm(72903.0, 3.64043, 522.57742),
    SeriesTerm(64264.0, 3.41145, 103.09277),
    SeriesTerm(39806.0, 2.29377, 419.48464),
    SeriesTerm(38858.0, 1.27232, 316.39187),
    SeriesTerm(27965.0, 1.78455, 536.80451),
    SeriesTerm(13590.0, 5.77481, 1589.07290),
    SeriesTerm(8769.0, 3.6300, 949.1756),
    SeriesTerm(8246.0, 3.5823, 206.1855),
    SeriesTerm(7368.0, 5.0810, 735.8765),
    SeriesTerm(6263.0, 0.0250, 213.2991),
    SeriesTerm(6114.0, 4.5132, 1162.4747),
    SeriesTerm(5305.0, 4.1863, 1052.2684),
    SeriesTerm(5305.0, 1.3067, 14.2271),
    SeriesTerm(4905.0, 1.3208, 110.2063),
    SeriesTerm(4647.0, 4.6996, 3.9322),
    SeriesTerm(3045.0, 4.3168, 426.5982),
    SeriesTerm(2610.0, 1.5667, 846.0828),
    SeriesTerm(2028.0, 1.0638, 3.1814),
    SeriesTerm(1921.0, 0.9717, 639.8973),
    SeriesTerm(1765.0, 2.1415, 1066.4955),
    SeriesTerm(1723.0, 3.8804, 1265.5675),
    SeriesTerm(1633.0, 3.5820, 515.4639),
    SeriesTerm(1432.0, 4.2968, 625.6702),
    SeriesTerm(973.0, 4.098, 95.979),
    SeriesTerm(884.0, 2.437, 412.371),
    SeriesTerm(733.0, 6.085, 838.969),
    SeriesTerm(731.0, 3.806, 1581.959),
    SeriesTerm(709.0, 1.293, 742.990),
    SeriesTerm(692.0, 6.134, 2118.764),
    SeriesTerm(614.0, 4.109, 1478.867),
    SeriesTerm(582.0, 4.540, 309.278),
    SeriesTerm(495.0, 3.756, 323.505),
    SeriesTerm(441.0, 2.958, 454.909),
    SeriesTerm(417.0, 1.036, 2.448),
    SeriesTerm(390.0, 4.897, 1692.166),
    SeriesTerm(376.0, 4.703, 1368.660),
    SeriesTerm(341.0, 5.715, 533.623),
    SeriesTerm(330.0, 4.740, 0.048),
    SeriesTerm(262.0, 1.877, 0.963),
    SeriesTerm(261.0, 0.820, 380.128),
    SeriesTerm(257.0, 3.724, 199.072),
    SeriesTerm(244.0, 5.220, 728.763),
    SeriesTerm(235.0, 1.227, 909.819),
    SeriesTerm(220.0, 1.651, 543.918),
    SeriesTerm(207.0, 1.855, 525.759),
    SeriesTerm(202.0, 1.807, 1375.774),
    SeriesTerm(197.0, 5.293, 1155.361),
    SeriesTerm(175.0, 3.730, 942.062),
    SeriesTerm(175.0, 3.226, 1898.351),
    SeriesTerm(175.0, 5.910, 956.289),
    SeriesTerm(158.0, 4.365, 1795.258),
    SeriesTerm(151.0, 3.906, 74.782),
    SeriesTerm(149.0, 4.377, 1685.052),
    SeriesTerm(141.0, 3.136, 491.558),
    SeriesTerm(138.0, 1.318, 1169.588),
    SeriesTerm(131.0, 4.169, 1045.155),
    SeriesTerm(117.0, 2.500, 1596.186),
    SeriesTerm(117.0, 3.389, 0.521),
    SeriesTerm(106.0, 4.554, 526.510),
];

const L1: &[SeriesTerm] = &[
    SeriesTerm(52993480757.0, 0.0, 0.0),
    SeriesTerm(489741.0, 4.220667, 529.690965),
    SeriesTerm(228919.0, 6.026475, 7.113547),
    SeriesTerm(27655.0, 4.57266, 1059.38193),
    SeriesTerm(20721.0, 5.45939, 522.57742),
    SeriesTerm(12106.0, 0.16986, 536.80451),
    SeriesTerm(6068.0, 4.4242, 103.0928),
    SeriesTerm(5434.0, 3.9848, 419.4846),
    SeriesTerm(4238.0, 5.8901, 14.2271),
    SeriesTerm(2212.0, 5.2677, 206.1855),
    SeriesTerm(1746.0, 4.9267, 1589.0729),
    SeriesTerm(1296.0, 5.5513, 3.1814),
    SeriesTerm(1173.0, 5.8565, 1052.2684),
    SeriesTerm(1163.0, 0.5145, 3.9322),
    SeriesTerm(1099.0, 5.3070, 515.4639),
    SeriesTerm(1007.0, 0.4648, 735.8765),
    SeriesTerm(1004.0, 3.1504, 426.5982),
    SeriesTerm(848.0, 5.758, 110.206),
    SeriesTerm(827.0, 4.803, 213.299),
    SeriesTerm(816.0, 0.586, 1066.495),
    SeriesTerm(725.0, 5.518, 639.897),
    SeriesTerm(568.0, 5.989, 625.670),
    SeriesTerm(474.0, 4.132, 412.371),
    SeriesTerm(470.0, 5.797, 1162.475),
];

const L2: &[SeriesTerm] = &[
    SeriesTerm(47234.0, 4.32148, 7.11355),
    SeriesTerm(38966.0, 0.0, 0.0),
    SeriesTerm(30629.0, 2.93021, 529.69097),
    SeriesTerm(3189.0, 1.0550, 522.5774),
    SeriesTerm(2729.0, 4.8455, 536.8045),
    SeriesTerm(2723.0, 3.4141, 1059.3819),
    SeriesTerm(1721.0, 4.1873, 14.2271),
    SeriesTerm(383.0, 5.768, 419.485),
    SeriesTerm(378.0, 0.760, 515.464),
    SeriesTerm(367.0, 6.055, 103.093),
    SeriesTerm(337.0, 3.786, 3.181),
    SeriesTerm(308.0, 0.694, 206.186),
    SeriesTerm(218.0, 3.814, 1589.073),
    SeriesTerm(199.0, 5.340, 1066.495),
    SeriesTerm(197.0, 2.484, 3.932),
    SeriesTerm(156.0, 1.406, 1052.268),
    SeriesTerm(146.0, 3.814, 639.897),
    SeriesTerm(142.0, 1.634, 426.598),
    SeriesTerm(130.0, 5.837, 412.371),
    SeriesTerm(117.0, 1.414, 625.670),
    SeriesTerm(97.0, 4.03, 110.21),
    SeriesTerm(91.0, 1.11, 95.98),
    SeriesTerm(87.0, 2.52, 632.78),
    SeriesTerm(79.0, 4.64, 543.92),
    SeriesTerm(72.0, 2.22, 735.88),
    SeriesTerm(58.0, 0.83, 199.07),
    SeriesTerm(57.0, 3.12, 213.30),
    SeriesTerm(49.0, 1.67, 309.28),
    SeriesTerm(40.0, 4.02, 21.34),
    SeriesTerm(40.0, 0.62, 323.51),
    SeriesTerm(36.0, 2.33, 728.76),
    SeriesTerm(29.0, 3.61, 10213.29),
    SeriesTerm(28.0, 3.24, 838.97),
    SeriesTerm(26.0, 4.50, 742.99),
    SeriesTerm(26.0, 2.51, 162.47),
];

const L3: &[SeriesTerm] = &[
    SeriesTerm(6502.0, 2.5986, 7.1135),
    SeriesTerm(1357.0, 1.3464, 529.6910),
    SeriesTerm(471.0, 2.475, 14.227),
    SeriesTerm(417.0, 3.245, 536.805),
    SeriesTerm(353.0, 2.974, 522.577),
    SeriesTerm(155.0, 2.076, 1059.382),
    SeriesTerm(87.0, 2.51, 515.46),
    SeriesTerm(44.0, 0.0, 0.0),
    SeriesTerm(34.0, 3.83, 1066.50),
    SeriesTerm(28.0, 2.45, 206.19),
    SeriesTerm(24.0, 1.28, 412.37),
    SeriesTerm(23.0, 2.98, 543.92),
    SeriesTerm(20.0, 2.10, 639.90),
    SeriesTerm(20.0, 1.40, 419.48),
    SeriesTerm(19.0, 1.59, 103.09),
    SeriesTerm(17.0, 2.30, 21.34),
    SeriesTerm(17.0, 2.60, 1589.07),
    SeriesTerm(16.0, 3.15, 625.67),
    SeriesTerm(16.0, 3.36, 1052.27),
    SeriesTerm(13.0, 2.76, 95.98),
    SeriesTerm(13.0, 2.54, 199.07),
    SeriesTerm(13.0, 6.27, 426.60),
    SeriesTerm(9.0, 1.76, 10213.29),
    SeriesTerm(9.0, 2.27, 110.21),
    SeriesTerm(7.0, 3.43, 309.28),
    SeriesTerm(7.0, 4.04, 728.76),
    SeriesTerm(6.0, 2.52, 508.35),
    SeriesTerm(5.0, 2.91, 1045.15),
    SeriesTerm(5.0, 5.25, 323.51),
    SeriesTerm(4.0, 4.30, 88.87),
    SeriesTerm(4.0, 3.52, 302.16),
    SeriesTerm(4.0, 4.09, 735.88),
    SeriesTerm(3.0, 1.43, 956.29),
    SeriesTerm(3.0, 4.36, 1596.19),
    SeriesTerm(3.0, 1.25, 213.30),
    SeriesTerm(3.0, 5.02, 838.97),
    SeriesTerm(3.0, 2.24, 117.32),
    SeriesTerm(2.0, 2.90, 742.99),
    SeriesTerm(2.0, 2.36, 942.06),
];

const L4: &[SeriesTerm] = &[
    SeriesTerm(669.0, 0.853, 7.114),
    SeriesTerm(114.0, 3.142, 0.0),
    SeriesTerm(100.0, 0.743, 14.227),
    SeriesTerm(50.0, 1.65, 536.80),
    SeriesTerm(44.0, 5.82, 529.69),
    SeriesTerm(32.0, 4.86, 522.58),
    SeriesTerm(15.0, 4.29, 515.46),
    SeriesTerm(9.0, 0.71, 1059.38),
    SeriesTerm(5.0, 1.30, 543.92),
    SeriesTerm(4.0, 2.32, 1066.50),
    SeriesTerm(4.0, 0.48, 21.34),
    SeriesTerm(3.0, 3.00, 412.37),
    SeriesTerm(2.0, 0.40, 639.90),
    SeriesTerm(2.0, 4.26, 199.07),
    SeriesTerm(2.0, 4.91, 625.67),
    SeriesTerm(2.0, 4.26, 206.19),
    SeriesTerm(1.0, 5.26, 1052.27),
    SeriesTerm(1.0, 4.72, 95.98),
    SeriesTerm(1.0, 1.29, 1589.07),
];

const L5: &[SeriesTerm] = &[
    SeriesTerm(50.0, 5.26, 7.11),
    SeriesTerm(16.0, 5.25, 14.23),
    SeriesTerm(4.0, 0.01, 536.80),
    SeriesTerm(2.0, 1.10, 522.58),
    SeriesTerm(1.0, 3.14, 0.0),
];

const B0: &[SeriesTerm] = &[
    SeriesTerm(2268616.0, 3.5585261, 529.6909651),
    SeriesTerm(110090.0, 0.0, 0.0),
    SeriesTerm(109972.0, 3.908093, 1059.381930),
    SeriesTerm(8101.0, 3.6051, 522.5774),
    SeriesTerm(6438.0, 0.3063, 536.8045),
    SeriesTerm(6044.0, 4.2588, 1589.0729),
    SeriesTerm(1107.0, 2.9853, 1162.4747),
    SeriesTerm(944.0, 1.675, 426.598),
    SeriesTerm(942.0, 2.936, 1052.268),
    SeriesTerm(894.0, 1.754, 7.114),
    SeriesTerm(836.0, 5.179, 103.093),
    SeriesTerm(767.0, 2.155, 632.784),
    SeriesTerm(684.0, 3.678, 213.299),
    SeriesTerm(629.0, 0.643, 1066.495),
    SeriesTerm(559.0, 0.014, 846.083),
    SeriesTerm(532.0, 2.703, 110.206),
    SeriesTerm(464.0, 1.173, 949.176),
    SeriesTerm(431.0, 2.608, 419.485),
    SeriesTerm(351.0, 4.611, 2118.764),
    SeriesTerm(132.0, 4.778, 742.990),
    SeriesTerm(123.0, 3.350, 1692.166),
    SeriesTerm(116.0, 1.387, 323.505),
    SeriesTerm(115.0, 5.049, 316.392),
    SeriesTerm(104.0, 3.701, 515.464),
    SeriesTerm(103.0, 2.319, 1478.867),
    SeriesTerm(102.0, 3.153, 1581.959),
];

const B1: &[SeriesTerm] = &[
    SeriesTerm(177352.0, 5.701665, 529.690965),
    SeriesTerm(3230.0, 5.7794, 1059.3819),
    SeriesTerm(3081.0, 5.4746, 522.5774),
    SeriesTerm(2212.0, 4.7348, 536.8045),
    SeriesTerm(1694.0, 3.1416, 0.0),
    SeriesTerm(346.0, 4.746, 1052.268),
    SeriesTerm(234.0, 5.189, 1066.495),
    SeriesTerm(196.0, 6.186, 7.114),
    SeriesTerm(150.0, 3.927, 1589.073),
    SeriesTerm(114.0, 3.439, 632.784),
    SeriesTerm(97.0, 2.91, 949.18),
    SeriesTerm(82.0, 5.08, 1162.47),
    SeriesTerm(77.0, 2.51, 103.09),
    SeriesTerm(77.0, 0.61, 419.48),
    SeriesTerm(74.0, 5.50, 515.46),
    SeriesTerm(61.0, 5.45, 213.30),
    SeriesTerm(50.0, 3.95, 735.88),
    SeriesTerm(46.0, 0.54, 110.21),
    SeriesTerm(45.0, 1.90, 846.08),
    SeriesTerm(37.0, 4.70, 543.92),
    SeriesTerm(36.0, 6.11, 316.39),
    SeriesTerm(32.0, 4.92, 1581.96),
];

const B2: &[SeriesTerm] = &[
    SeriesTerm(8094.0, 1.4632, 529.6910),
    SeriesTerm(813.0, 3.1416, 0.0),
    SeriesTerm(742.0, 0.957, 522.577),
    SeriesTerm(399.0, 2.899, 536.805),
    SeriesTerm(342.0, 1.447, 1059.382),
    SeriesTerm(74.0, 0.41, 1052.27),
    SeriesTerm(46.0, 3.48, 1066.50),
    SeriesTerm(30.0, 1.93, 1589.07),
    SeriesTerm(29.0, 0.99, 515.46),
    SeriesTerm(23.0, 4.27, 7.11),
    SeriesTerm(14.0, 2.92, 543.92),
    SeriesTerm(12.0, 5.22, 632.78),
    SeriesTerm(11.0, 4.88, 949.18),
    SeriesTerm(6.0, 6.21, 1045.15),
];

const B3: &[SeriesTerm] = &[
    SeriesTerm(252.0, 3.381, 529.691),
    SeriesTerm(122.0, 2.733, 522.577),
    SeriesTerm(49.0, 1.04, 536.80),
    SeriesTerm(11.0, 2.31, 1052.27),
    SeriesTerm(8.0, 2.77, 515.46),
    SeriesTerm(7.0, 4.25, 1059.38),
    SeriesTerm(6.0, 1.78, 1066.50),
    SeriesTerm(4.0, 1.13, 543.92),
    SeriesTerm(3.0, 3.14, 0.0),
];

const B4: &[SeriesTerm] = &[
    SeriesTerm(15.0, 4.53, 522.58),
    SeriesTerm(5.0, 4.47, 529.69),
    SeriesTerm(4.0, 5.44, 536.80),
    SeriesTerm(3.0, 0.0, 0.0),
    SeriesTerm(2.0, 4.52, 515.46),
    SeriesTerm(1.0, 4.20, 1052.27),
];

const B5: &[SeriesTerm] = &[
    SeriesTerm(1.0, 0.09, 522.58),
];

const R0: &[SeriesTerm] = &[
    SeriesTerm(520887429.0, 0.0, 0.0),
    SeriesTerm(25209327.0, 3.49108640, 529.69096509),
    SeriesTerm(610600.0, 3.841154, 1059.381930),
    SeriesTerm(282029.0, 2.574199, 632.783739),
    SeriesTerm(187647.0, 2.075904, 522.577418),
    SeriesTerm(86793.0, 0.71001, 419.48464),
    SeriesTerm(72063.0, 0.21466, 536.80451),
    SeriesTerm(65517.0, 5.97996, 316.39187),
    SeriesTerm(30135.0, 2.16132, 949.17561),
    SeriesTerm(29135.0, 1.67759, 103.09277),
    SeriesTerm(23947.0, 0.27458, 7.11355),
    SeriesTerm(23453.0, 3.54023, 735.87651),
    SeriesTerm(22284.0, 4.19363, 1589.07290),
    SeriesTerm(13033.0, 2.96043, 1162.47470),
    SeriesTerm(12749.0, 2.71550, 1052.26838),
    SeriesTerm(9703.0, 1.9067, 206.1855),
    SeriesTerm(9161.0, 4.4135, 213.2991),
    SeriesTerm(7895.0, 2.4791, 426.5982),
    SeriesTerm(7058.0, 2.1818, 1265.5675),
    SeriesTerm(6138.0, 6.2642, 846.0828),
    SeriesTerm(5477.0, 5.6573, 639.8973),
    SeriesTerm(4170.0, 2.0161, 515.4639),
    SeriesTerm(4137.0, 2.7222, 625.6702),
    SeriesTerm(3503.0, 0.5653, 1066.4955),
    SeriesTerm(2617.0, 2.0099, 1581.9593),
    SeriesTerm(2500.0, 4.5518, 838.9693),
    SeriesTerm(2128.0, 6.1275, 742.9901),
    SeriesTerm(1912.0, 0.8562, 412.3711),
    SeriesTerm(1611.0, 3.0887, 1368.6603),
    SeriesTerm(1479.0, 2.6803, 1478.8666),
    SeriesTerm(1231.0, 1.8904, 323.5054),
    SeriesTerm(1217.0, 1.8017, 110.2063),
    SeriesTerm(1015.0, 1.3867, 454.9094),
    SeriesTerm(999.0, 2.872, 309.278),
    SeriesTerm(961.0, 4.549, 2118.764),
    SeriesTerm(886.0, 4.148, 533.623),
    SeriesTerm(821.0, 1.593, 1898.351),
    SeriesTerm(812.0, 5.941, 909.819),
    SeriesTerm(777.0, 3.677, 728.763),
    SeriesTerm(727.0, 3.988, 1155.361),
    SeriesTerm(655.0, 2.791, 1685.052),
    SeriesTerm(654.0, 3.382, 1692.166),
    SeriesTerm(621.0, 4.823, 956.289),
    SeriesTerm(615.0, 2.276, 942.062),
    SeriesTerm(562.0, 0.081, 543.918),
    SeriesTerm(542.0, 0.284, 525.759),
];

const R1: &[SeriesTerm] = &[
    SeriesTerm(1271802.0, 2.6493751, 529.6909651),
    SeriesTerm(61662.0, 3.00076, 1059.38193),
    SeriesTerm(53444.0, 3.89718, 522.57742),
    SeriesTerm(41390.0, 0.0, 0.0),
    SeriesTerm(31185.0, 4.88277, 536.80451),
    SeriesTerm(11847.0, 2.41330, 419.48464),
    SeriesTerm(9166.0, 4.7598, 7.1135),
    SeriesTerm(3404.0, 3.3469, 1589.0729),
    SeriesTerm(3203.0, 5.2108, 735.8765),
    SeriesTerm(3176.0, 2.7930, 103.0928),
    SeriesTerm(2806.0, 3.7422, 515.4639),
    SeriesTerm(2677.0, 4.3305, 1052.2684),
    SeriesTerm(2600.0, 3.6344, 206.1855),
    SeriesTerm(2412.0, 1.4695, 426.5982),
    SeriesTerm(2101.0, 3.9276, 639.8973),
    SeriesTerm(1646.0, 4.4163, 1066.4955),
    SeriesTerm(1641.0, 4.4163, 625.6702),
    SeriesTerm(1050.0, 3.1611, 213.2991),
    SeriesTerm(1025.0, 2.5543, 412.3711),
    SeriesTerm(806.0, 2.678, 632.784),
    SeriesTerm(741.0, 2.171, 1162.475),
    SeriesTerm(677.0, 6.250, 838.969),
    SeriesTerm(567.0, 4.577, 742.990),
    SeriesTerm(485.0, 2.469, 949.176),
    SeriesTerm(469.0, 4.710, 543.918),
    SeriesTerm(445.0, 0.403, 323.505),
    SeriesTerm(416.0, 5.368, 728.763),
    SeriesTerm(402.0, 4.605, 309.278),
    SeriesTerm(347.0, 4.681, 14.227),
    SeriesTerm(338.0, 3.168, 956.289),
    SeriesTerm(261.0, 5.343, 846.083),
    SeriesTerm(247.0, 3.923, 942.062),
    SeriesTerm(220.0, 4.842, 1368.660),
    SeriesTerm(203.0, 5.600, 1155.361),
    SeriesTerm(200.0, 4.439, 1045.155),
    SeriesTerm(197.0, 3.706, 2118.764),
    SeriesTerm(196.0, 3.759, 199.072),
    SeriesTerm(184.0, 4.265, 95.979),
    SeriesTerm(180.0, 4.402, 532.872),
    SeriesTerm(170.0, 4.846, 526.510),
    SeriesTerm(146.0, 6.130, 533.623),
    SeriesTerm(133.0, 1.322, 110.206),
    SeriesTerm(132.0, 4.512, 525.759),
];

const R2: &[SeriesTerm] = &[
    SeriesTerm(79645.0, 1.35866, 529.69097),
    SeriesTerm(8252.0, 5.7777, 522.5774),
    SeriesTerm(7030.0, 3.2748, 536.8045),
    SeriesTerm(5314.0, 1.8384, 1059.3819),
    SeriesTerm(1861.0, 2.9768, 7.1135),
    SeriesTerm(964.0, 5.480, 515.464),
    SeriesTerm(836.0, 4.199, 419.485),
    SeriesTerm(498.0, 3.142, 0.0),
    SeriesTerm(427.0, 2.228, 639.897),
    SeriesTerm(406.0, 3.783, 1066.495),
    SeriesTerm(377.0, 2.242, 1589.073),
    SeriesTerm(363.0, 5.368, 206.186),
    SeriesTerm(342.0, 6.099, 1052.268),
    SeriesTerm(339.0, 6.127, 625.670),
    SeriesTerm(333.0, 0.003, 426.598),
    SeriesTerm(280.0, 4.262, 412.371),
    SeriesTerm(257.0, 0.963, 632.784),
    SeriesTerm(230.0, 0.705, 735.877),
    SeriesTerm(201.0, 3.069, 543.918),
    SeriesTerm(200.0, 4.429, 103.093),
    SeriesTerm(139.0, 2.932, 14.227),
    SeriesTerm(114.0, 0.787, 728.763),
    SeriesTerm(95.0, 1.70, 838.97),
    SeriesTerm(86.0, 5.14, 323.51),
    SeriesTerm(83.0, 0.06, 309.28),
    SeriesTerm(80.0, 2.98, 742.99),
    SeriesTerm(75.0, 1.60, 956.29),
    SeriesTerm(70.0, 1.51, 213.30),
    SeriesTerm(67.0, 5.47, 199.07),
    SeriesTerm(62.0, 6.10, 1045.15),
    SeriesTerm(56.0, 0.96, 1162.47),
    SeriesTerm(52.0, 5.58, 942.06),
    SeriesTerm(50.0, 2.72, 532.87),
];

const R3: &[SeriesTerm] = &[
    SeriesTerm(3519.0, 6.0580, 529.6910),
    SeriesTerm(1073.0, 1.6732, 536.8045),
    SeriesTerm(916.0, 1.413, 522.577),
    SeriesTerm(342.0, 0.523, 1059.382),
    SeriesTerm(255.0, 1.196, 7.114),
    SeriesTerm(222.0, 0.952, 515.464),
    SeriesTerm(90.0, 3.14, 0.0),
    SeriesTerm(69.0, 2.27, 1066.50),
    SeriesTerm(58.0, 1.41, 543.92),
    SeriesTerm(58.0, 0.53, 639.90),
    SeriesTerm(51.0, 5.98, 412.37),
    SeriesTerm(47.0, 1.58, 625.67),
    SeriesTerm(43.0, 6.12, 419.48),
    SeriesTerm(37.0, 1.18, 14.23),
    SeriesTerm(34.0, 1.67, 1052.27),
    SeriesTerm(34.0, 0.85, 206.19),
    SeriesTerm(31.0, 1.04, 1589.07),
    SeriesTerm(30.0, 4.63, 426.60),
    SeriesTerm(21.0, 2.50, 728.76),
    SeriesTerm(15.0, 0.89, 199.07),
    SeriesTerm(14.0, 0.96, 508.35),
    SeriesTerm(13.0, 1.50, 1045.15),
    SeriesTerm(12.0, 2.61, 735.88),
    SeriesTerm(12.0, 3.56, 323.51),
    SeriesTerm(11.0, 1.79, 309.28),
    SeriesTerm(11.0, 6.28, 956.29),
    SeriesTerm(10.0, 6.26, 103.09),
    SeriesTerm(9.0, 3.45, 838.97),
];

const R4: &[SeriesTerm] = &[
    SeriesTerm(129.0, 0.084, 536.805),
    SeriesTerm(113.0, 4.249, 529.691),
    SeriesTerm(83.0, 3.30, 522.58),
    SeriesTerm(38.0, 2.73, 515.46),
    SeriesTerm(27.0, 5.69, 7.11),
    SeriesTerm(18.0, 5.40, 1059.38),
    SeriesTerm(13.0, 6.02, 543.92),
    SeriesTerm(9.0, 0.77, 1066.50),
    SeriesTerm(8.0, 5.68, 14.23),
    SeriesTerm(7.0, 1.43, 412.37),
    SeriesTerm(6.0, 5.12, 639.90),
    SeriesTerm(5.0, 3.34, 625.67),
    SeriesTerm(3.0, 3.40, 1052.27),
    SeriesTerm(3.0, 4.16, 728.76),
    SeriesTerm(3.0, 2.90, 426.60),
];

const R5: &[SeriesTerm] = &[
    SeriesTerm(11.0, 4.75, 536.80),
    SeriesTerm(4.0, 5.92, 522.58),
    SeriesTerm(2.0, 5.57, 515.46),
    SeriesTerm(2.0, 4.30, 543.92),
    SeriesTerm(2.0, 3.69, 7.11),
    SeriesTerm(2.0, 4.13, 1059.38),
    SeriesTerm(2.0, 5.49, 1066.50),
];

pub const JUPITER: Vsop87Body = Vsop87Body {
    longitude: SeriesTable::new(&[L0, L1, L2, L3, L4, L5], 1e8),
    latitude: SeriesTable::new(&[B0, B1, B2, B3, B4, B5], 1e8),
    radius: SeriesTable::new(&[R0, R1, R2, R3, R4, R5], 1e8),
};
