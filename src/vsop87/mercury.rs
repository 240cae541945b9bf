//! Truncated VSOP87 series for Mercury: heliocentric longitude `L`, latitude `B` and radius `R`,
//! mean ecliptic and equinox of date. Amplitudes are in units of 1e-8 (radians for `L` and `B`, AU for `R`).

use crate::series::{SeriesTable, SeriesTerm};

use super::Vsop87Body;

const L0: &[SeriesTerm] = &[
    SeriesTerm(440250710.0, 0.0, 0.0),
    SeriesTerm(40989415.0, 1.48302034, 26087.90314157),
    SeriesTerm(5046294.0, 4.4778549, 52175.8062831),
    SeriesTerm(855347.0, 1.165203, 78263.709425),
    SeriesTerm(165590.0, 4.119692, 104351.612566),
    SeriesTerm(34562.0, 0.77931, 130439.51571),
    SeriesTerm(7583.0, 3.7135, 156527.4188),
    SeriesTerm(3560.0, 1.5120, 1109.3786),
    SeriesTerm(1803.0, 4.1033, 5661.3320),
    SeriesTerm(1726.0, 0.3583, 182615.3220),
    SeriesTerm(1590.0, 2.9951, 25028.5212),
    SeriesTerm(1365.0, 4.5992, 27197.2817),
    SeriesTerm(1017.0, 0.8803, 31749.2352),
    SeriesTerm(714.0, 1.541, 24978.525),
    SeriesTerm(644.0, 5.303, 21535.950),
    SeriesTerm(451.0, 6.050, 51116.424),
    SeriesTerm(404.0, 3.282, 208703.225),
    SeriesTerm(352.0, 5.242, 20426.571),
    SeriesTerm(345.0, 2.792, 15874.618),
    SeriesTerm(343.0, 5.765, 955.600),
    SeriesTerm(339.0, 5.863, 25558.212),
    SeriesTerm(325.0, 1.337, 53285.185),
    SeriesTerm(273.0, 2.495, 529.691),
    SeriesTerm(264.0, 3.917, 57837.138),
    SeriesTerm(260.0, 0.987, 4551.953),
    SeriesTerm(239.0, 0.113, 1059.382),
    SeriesTerm(235.0, 0.267, 11322.664),
    SeriesTerm(217.0, 0.660, 13521.751),
    SeriesTerm(209.0, 2.092, 47623.853),
    SeriesTerm(183.0, 2.629, 27043.503),
    SeriesTerm(182.0, 2.434, 25661.305),
    SeriesTerm(176.0, 4.536, 51066.428),
    SeriesTerm(173.0, 2.452, 24498.830),
    SeriesTerm(142.0, 3.360, 37410.567),
    SeriesTerm(138.0, 0.291, 10213.286),
    SeriesTerm(125.0, 3.721, 39609.655),
    SeriesTerm(118.0, 2.781, 77204.327),
    SeriesTerm(106.0, 4.206, 19804.827),
];

const L1: &[SeriesTerm] = &[
    SeriesTerm(2608814706223.0, 0.0, 0.0),
    SeriesTerm(1126008.0, 6.2170397, 26087.9031416),
    SeriesTerm(303471.0, 3.055655, 52175.806283),
    SeriesTerm(80538.0, 6.10455, 78263.70942),
    SeriesTerm(21245.0, 2.83532, 104351.61257),
    SeriesTerm(5592.0, 5.8268, 130439.5157),
    SeriesTerm(1472.0, 2.5185, 156527.4188),
    SeriesTerm(388.0, 5.480, 182615.322),
    SeriesTerm(352.0, 3.052, 1109.379),
    SeriesTerm(103.0, 2.149, 24978.525),
    SeriesTerm(94.0, 6.12, 27197.28),
    SeriesTerm(91.0, 0.00, 20426.57),
    SeriesTerm(52.0, 5.62, 5661.33),
    SeriesTerm(44.0, 4.57, 208703.23),
    SeriesTerm(28.0, 3.04, 51066.43),
    SeriesTerm(27.0, 5.09, 234791.13),
];

const L2: &[SeriesTerm] = &[
    SeriesTerm(53050.0, 0.0, 0.0),
    SeriesTerm(16904.0, 4.69072, 26087.90314),
    SeriesTerm(7397.0, 1.3474, 52175.8063),
    SeriesTerm(3018.0, 4.4564, 78263.7094),
    SeriesTerm(1107.0, 1.2623, 104351.6126),
    SeriesTerm(378.0, 4.320, 130439.516),
    SeriesTerm(123.0, 1.069, 156527.419),
    SeriesTerm(39.0, 4.08, 182615.32),
    SeriesTerm(15.0, 4.63, 1109.38),
    SeriesTerm(12.0, 0.79, 208703.23),
];

const L3: &[SeriesTerm] = &[
    SeriesTerm(188.0, 0.035, 52175.806),
    SeriesTerm(142.0, 3.125, 26087.903),
    SeriesTerm(97.0, 3.00, 78263.71),
    SeriesTerm(44.0, 6.02, 104351.61),
    SeriesTerm(35.0, 0.0, 0.0),
    SeriesTerm(18.0, 2.78, 130439.52),
    SeriesTerm(7.0, 5.82, 156527.42),
    SeriesTerm(3.0, 2.57, 182615.32),
];

const L4: &[SeriesTerm] = &[
    SeriesTerm(114.0, 3.1416, 0.0),
    SeriesTerm(2.0, 2.03, 26087.90),
    SeriesTerm(2.0, 1.42, 78263.71),
    SeriesTerm(2.0, 4.50, 52175.81),
    SeriesTerm(1.0, 4.50, 104351.61),
    SeriesTerm(1.0, 1.27, 130439.52),
];

const L5: &[SeriesTerm] = &[
    SeriesTerm(1.0, 3.14, 0.0),
];

const B0: &[SeriesTerm] = &[
    SeriesTerm(11737529.0, 1.98357499, 26087.90314157),
    SeriesTerm(2388077.0, 5.0373896, 52175.8062831),
    SeriesTerm(1222840.0, 3.1415927, 0.0),
    SeriesTerm(543252.0, 1.796444, 78263.709425),
    SeriesTerm(129779.0, 4.832325, 104351.612566),
    SeriesTerm(31867.0, 1.58088, 130439.51571),
    SeriesTerm(7963.0, 4.6097, 156527.4188),
    SeriesTerm(2014.0, 1.3532, 182615.3220),
    SeriesTerm(514.0, 4.378, 208703.225),
    SeriesTerm(209.0, 2.020, 24978.525),
    SeriesTerm(208.0, 4.918, 27197.282),
    SeriesTerm(132.0, 1.119, 234791.128),
    SeriesTerm(121.0, 1.813, 53285.185),
    SeriesTerm(100.0, 5.657, 20426.571),
];

const B1: &[SeriesTerm] = &[
    SeriesTerm(429151.0, 3.501698, 26087.903142),
    SeriesTerm(146234.0, 3.141593, 0.0),
    SeriesTerm(22675.0, 0.01515, 52175.80628),
    SeriesTerm(10895.0, 0.48540, 78263.70942),
    SeriesTerm(6353.0, 3.4294, 104351.6126),
    SeriesTerm(2496.0, 0.1605, 130439.5157),
    SeriesTerm(860.0, 3.185, 156527.419),
    SeriesTerm(278.0, 6.210, 182615.322),
    SeriesTerm(86.0, 2.95, 208703.23),
    SeriesTerm(28.0, 0.29, 27197.28),
    SeriesTerm(26.0, 5.98, 234791.13),
];

const B2: &[SeriesTerm] = &[
    SeriesTerm(11831.0, 4.79066, 26087.90314),
    SeriesTerm(1914.0, 0.0, 0.0),
    SeriesTerm(1045.0, 1.2122, 52175.8063),
    SeriesTerm(266.0, 4.434, 78263.709),
    SeriesTerm(170.0, 1.623, 104351.613),
    SeriesTerm(96.0, 4.80, 130439.52),
    SeriesTerm(45.0, 1.61, 156527.42),
    SeriesTerm(18.0, 4.67, 182615.32),
    SeriesTerm(7.0, 1.43, 208703.23),
];

const B3: &[SeriesTerm] = &[
    SeriesTerm(235.0, 0.354, 26087.903),
    SeriesTerm(161.0, 0.0, 0.0),
    SeriesTerm(19.0, 4.36, 52175.81),
    SeriesTerm(6.0, 2.51, 78263.71),
    SeriesTerm(5.0, 6.14, 104351.61),
    SeriesTerm(3.0, 3.12, 130439.52),
    SeriesTerm(2.0, 6.27, 156527.42),
];

const B4: &[SeriesTerm] = &[
    SeriesTerm(4.0, 1.75, 26087.90),
    SeriesTerm(1.0, 3.14, 0.0),
];

const R0: &[SeriesTerm] = &[
    SeriesTerm(39528272.0, 0.0, 0.0),
    SeriesTerm(7834132.0, 6.1923372, 26087.9031416),
    SeriesTerm(795526.0, 2.959897, 52175.806283),
    SeriesTerm(121282.0, 6.010642, 78263.709425),
    SeriesTerm(21922.0, 2.77820, 104351.61257),
    SeriesTerm(4354.0, 5.8289, 130439.5157),
    SeriesTerm(918.0, 2.597, 156527.419),
    SeriesTerm(290.0, 1.424, 25028.521),
    SeriesTerm(260.0, 3.028, 27197.282),
    SeriesTerm(202.0, 5.647, 182615.322),
    SeriesTerm(201.0, 5.592, 31749.235),
    SeriesTerm(142.0, 6.253, 24978.525),
    SeriesTerm(100.0, 3.734, 21535.950),
];

const R1: &[SeriesTerm] = &[
    SeriesTerm(217348.0, 4.656172, 26087.903142),
    SeriesTerm(44142.0, 1.42386, 52175.80628),
    SeriesTerm(10094.0, 4.47466, 78263.70942),
    SeriesTerm(2433.0, 1.2423, 104351.6126),
    SeriesTerm(1624.0, 0.0, 0.0),
    SeriesTerm(604.0, 4.293, 130439.516),
    SeriesTerm(153.0, 1.061, 156527.419),
    SeriesTerm(39.0, 4.11, 182615.32),
];

const R2: &[SeriesTerm] = &[
    SeriesTerm(3118.0, 3.0823, 26087.9031),
    SeriesTerm(1245.0, 6.1518, 52175.8063),
    SeriesTerm(425.0, 2.926, 78263.709),
    SeriesTerm(136.0, 5.980, 104351.613),
    SeriesTerm(42.0, 2.75, 130439.52),
    SeriesTerm(22.0, 3.14, 0.0),
    SeriesTerm(13.0, 5.80, 156527.42),
];

const R3: &[SeriesTerm] = &[
    SeriesTerm(33.0, 1.68, 26087.90),
    SeriesTerm(24.0, 4.63, 52175.81),
    SeriesTerm(12.0, 1.39, 78263.71),
    SeriesTerm(5.0, 4.44, 104351.61),
    SeriesTerm(2.0, 1.21, 130439.52),
];

pub const MERCURY: Vsop87Body = Vsop87Body {
    longitude: SeriesTable::new(&[L0, L1, L2, L3, L4, L5], 1e8),
    latitude: SeriesTable::new(&[B0, B1, B2, B3, B4], 1e8),
    radius: SeriesTable::new(&[R0, R1, R2, R3], 1e8),
};
