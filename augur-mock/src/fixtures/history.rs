//! ETH/USDT 30-minute klines for 2022-11-01, in exchange dump layout
//! (open time ms, open, high, low, close, volume, close time ms).
//! The 05:00 candle carries 250 ms of timestamp quantization noise.

/// Open time of the first candle, seconds since the epoch (2022-11-01 00:00:00 UTC).
pub const START_SECS: i64 = 1_667_260_800;

/// Hourly closes from the fixture, 00:00 through 11:00.
pub const HOURLY_CLOSES: [f64; 12] = [
    1619.85, 1620.84, 1623.08, 1624.32, 1626.35, 1626.95, 1628.01, 1628.13, 1628.79, 1629.54,
    1630.70, 1632.55,
];

/// Forecast for the twelve hours starting at [`START_SECS`].
pub const PREDICTED: [f64; 12] = [
    1619.3577, 1619.9607, 1620.6091, 1621.419, 1622.3264, 1623.4308, 1624.6201, 1625.8335,
    1627.1067, 1628.3867, 1629.7463, 1631.1682,
];

pub const ETH_USDT_30M: &str = r#"[
  [1667260800000, "1618.90", "1620.65", "1618.20", "1619.85", "500.0", 1667262599999],
  [1667262600000, "1619.85", "1621.36", "1619.05", "1620.46", "548.4", 1667264399999],
  [1667264400000, "1620.46", "1621.84", "1619.56", "1620.84", "596.8", 1667266199999],
  [1667266200000, "1620.84", "1622.64", "1619.84", "1621.84", "645.2", 1667267999999],
  [1667268000000, "1621.84", "1623.98", "1621.14", "1623.08", "693.6", 1667269799999],
  [1667269800000, "1623.08", "1624.74", "1622.28", "1623.74", "742.0", 1667271599999],
  [1667271600000, "1623.74", "1625.12", "1622.84", "1624.32", "790.4", 1667273399999],
  [1667273400000, "1624.32", "1626.34", "1623.32", "1625.44", "577.7", 1667275199999],
  [1667275200000, "1625.44", "1627.35", "1624.74", "1626.35", "626.1", 1667276999999],
  [1667277000000, "1626.35", "1627.38", "1625.55", "1626.58", "674.5", 1667278799999],
  [1667278800250, "1626.58", "1627.85", "1625.68", "1626.95", "722.9", 1667280600249],
  [1667280600000, "1626.95", "1628.72", "1625.95", "1627.72", "771.3", 1667282399999],
  [1667282400000, "1627.72", "1628.81", "1627.02", "1628.01", "819.7", 1667284199999],
  [1667284200000, "1628.01", "1628.91", "1627.04", "1627.84", "868.1", 1667285999999],
  [1667286000000, "1627.84", "1629.13", "1626.94", "1628.13", "655.4", 1667287799999],
  [1667287800000, "1628.13", "1629.52", "1627.13", "1628.72", "703.8", 1667289599999],
  [1667289600000, "1628.72", "1629.69", "1628.02", "1628.79", "752.2", 1667291399999],
  [1667291400000, "1628.79", "1629.81", "1627.99", "1628.81", "800.6", 1667293199999],
  [1667293200000, "1628.81", "1630.34", "1627.91", "1629.54", "849.0", 1667294999999],
  [1667295000000, "1629.54", "1631.26", "1628.54", "1630.36", "897.4", 1667296799999],
  [1667296800000, "1630.36", "1631.70", "1629.66", "1630.70", "945.8", 1667298599999],
  [1667298600000, "1630.70", "1632.11", "1629.90", "1631.31", "733.1", 1667300399999],
  [1667300400000, "1631.31", "1633.45", "1630.41", "1632.55", "781.5", 1667302199999],
  [1667302200000, "1632.55", "1634.51", "1631.55", "1633.51", "829.9", 1667303999999],
  [1667304000000, "1633.51", "1634.81", "1632.81", "1634.01", "878.3", 1667305799999],
  [1667305800000, "1634.01", "1635.81", "1633.21", "1634.91", "926.7", 1667307599999],
  [1667307600000, "1634.91", "1637.09", "1634.01", "1636.09", "975.1", 1667309399999],
  [1667309400000, "1636.09", "1637.45", "1635.09", "1636.65", "1023.5", 1667311199999],
  [1667311200000, "1636.65", "1637.78", "1635.95", "1636.88", "810.8", 1667312999999],
  [1667313000000, "1636.88", "1638.57", "1636.08", "1637.57", "859.2", 1667314799999],
  [1667314800000, "1637.57", "1639.03", "1636.67", "1638.23", "907.6", 1667316599999],
  [1667316600000, "1638.23", "1639.13", "1637.20", "1638.20", "956.0", 1667318399999]
]"#;
