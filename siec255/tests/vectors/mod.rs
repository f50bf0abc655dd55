//! SIEC255 test vectors, computed independently of this crate.

#![allow(dead_code)]

use hex_literal::hex;

/// Repeated addition of the generator: `G, 2G, 3G, 4G, 5G` as `(x, y)`.
pub const ADD_TEST_VECTORS: &[([u8; 32], [u8; 32])] = &[
    (
        hex!("0000000000000000000000000000000000000000000000000000000000000005"),
        hex!("000000000000000000000000000000000000000000000000000000000000000C"),
    ),
    (
        hex!("0F0000000000000000000000007803CF1E000000000000000000F00F3CB5E78F"),
        hex!("21200000000000000000000001090869624000000000000000021221A611B4B6"),
    ),
    (
        hex!("2249A60BBD1BAC22F01479B64AACB3B5AC2E9E013ED8F305CBE019934289D4E1"),
        hex!("20F245400DFD53DB2020C45B64154F433CDD2D5C5DD6888935644A8ECA9D3009"),
    ),
    (
        hex!("1B3C1AB2FFF8CC396D2C1528FD5E7229B58C06888DECB98657312B2A0ABC3EF9"),
        hex!("14A8371E5D745FE915613984AF6451EB655CB3150A91CAA9BAFC5781F18D1257"),
    ),
    (
        hex!("376F04839B52B5ED6155A8AC08C2719604A177A20EB2E1171A6315B6A21A4576"),
        hex!("3130F61AAD5197BD92DD0996EC5C009F35F1651059315DA2E14E4A56E6B0C66F"),
    ),
];

/// `x` and the smaller of its two square roots `y` for `y² = x³ + 19`.
pub const LIFT_X_TEST_VECTORS: &[(u32, [u8; 32])] = &[
    (
        1,
        hex!("0453B450A8EC4BDA4E470BBE2C50635D82A5CB307B2A8E479ACBCD16F0B1D0E3"),
    ),
    (
        2,
        hex!("1A2D6F843DF80F1C9A99249F22200F5ED59D7EDFB06FBA78DCA0AD618A1FDD25"),
    ),
    (
        3,
        hex!("0C2708DEEBDCDAE5FA3126AD6BF5D4939CF0D2DF2BFF5759D2A3BE34DFA81F9E"),
    ),
    (
        5,
        hex!("000000000000000000000000000000000000000000000000000000000000000C"),
    ),
];

/// x-coordinates with no point on the curve.
pub const NOT_ON_CURVE_X: &[u32] = &[0, 4, 6, 8, 9];

/// Key generated from an all-zero randomness source: `(k, x, y)`.
pub const ZERO_SOURCE_KEY: ([u8; 32], [u8; 32], [u8; 32]) = (
    hex!("0042000000000000000000000000000000000000000000000000000000000000"),
    hex!("313ECD78C1A750B34F2841638A9A520CEFE6E5D9B8CDAE9797283B748C1C3397"),
    hex!("39CB73858B606567F2E78303D4594EC64004B6C0365674B445B9B6F344D338A9"),
);
