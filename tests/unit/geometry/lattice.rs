use super::*;
use crate::foundation::math::approx_eq;

#[test]
fn five_bars_narrow_toward_the_base() {
    let bars = cross_bars(120.0, 5).unwrap();
    assert_eq!(bars.len(), 5);
    let h = 120.0 * 0.866;
    for (j, bar) in bars.iter().enumerate() {
        let p = (j + 1) as f64 / 6.0;
        assert!(approx_eq(bar.p0.y, h * p));
        assert_eq!(bar.p0.y, bar.p1.y);
        assert!(approx_eq(bar.p0.x, 60.0 * p));
        assert!(approx_eq(bar.p1.x, 120.0 - 60.0 * p));
    }
    let widths: Vec<f64> = bars.iter().map(|b| b.p1.x - b.p0.x).collect();
    assert!(widths.windows(2).all(|w| w[0] > w[1]));
}

#[test]
fn diagonals_meet_the_midline() {
    let [a, b, c] = facet_diagonals(100.0).unwrap();
    assert_eq!(a.p0, b.p0);
    assert!(approx_eq(a.p1.x, 25.0) && approx_eq(a.p1.y, 43.3));
    assert!(approx_eq(b.p1.x, 75.0) && approx_eq(b.p1.y, 43.3));
    assert!(approx_eq(c.p0.y, 86.6) && approx_eq(c.p1.x, 50.0));
}

#[test]
fn lattice_rejects_bad_inputs() {
    assert!(cross_bars(100.0, 0).is_err());
    assert!(cross_bars(0.0, 5).is_err());
    assert!(facet_diagonals(-1.0).is_err());
}
