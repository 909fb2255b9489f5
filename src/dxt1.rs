pub const NUM_SELECTOR_MAPPINGS: usize = 10;

/// Candidate translations of ETC1 selector slots to DXT1 gradient stops.
///
/// Entry `[m][s]` is the DXT1 stop used for ETC1 slot `s` under mapping `m`.
/// Stops are numbered along the gradient: 0 is the low endpoint, 3 the high one.
#[rustfmt::skip]
pub static SELECTOR_MAPPINGS: [[u8; 4]; NUM_SELECTOR_MAPPINGS] = [
    [ 0, 0, 1, 1 ],
    [ 0, 0, 1, 2 ],
    [ 0, 0, 1, 3 ],
    [ 0, 0, 2, 3 ],
    [ 0, 1, 1, 1 ],
    [ 0, 1, 2, 2 ],
    [ 0, 1, 2, 3 ],
    [ 0, 2, 3, 3 ],
    [ 1, 2, 2, 2 ],
    [ 1, 2, 3, 3 ],
];

pub fn expand_6_to_8(x: u8) -> u8 {
    (x << 2) | (x >> 4)
}

/// Returns the four stops of the DXT1 gradient between two 6-bit endpoints.
pub fn gradient(lo: u8, hi: u8) -> [u8; 4] {
    let c0 = expand_6_to_8(lo) as u32;
    let c3 = expand_6_to_8(hi) as u32;
    [
        c0 as u8,
        ((c0 * 2 + c3) / 3) as u8,
        ((c3 * 2 + c0) / 3) as u8,
        c3 as u8,
    ]
}
