// ─────────────────────────────────────────────────────────────────────
// PFD Double Layer — Report
// © 2026 pfd-edl contributors.
// Model: analytical Poisson-Fermi-Dirac double-layer approximation,
//        © its published authors.
// License: GNU AGPL v3
// ─────────────────────────────────────────────────────────────────────
//! Plain-text summaries, laid out like the reference logs shipped with
//! the publication.

use crate::solution::xstar_bracket;
use crate::sweep::SweepPoint;
use edl_types::state::DoubleLayerSummary;

/// Scientific notation with a signed, two-digit exponent: `2.93E+04`.
pub fn format_exp(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "NAN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "INF" } else { "-INF" }.to_string();
    }
    let s = format!("{value:.precision$e}");
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{mantissa}E{sign}{:02}", exp.abs())
        }
        None => s,
    }
}

/// Summary lines for one system, including the x* line.
pub fn summary_lines(summary: &DoubleLayerSummary) -> Vec<String> {
    let mut lines = vec![
        format!("x_1      = {:8.4} A", summary.x1),
        format!("phi(x_1) = {:8.4} V", summary.phi_x1),
        format!("x_2      = {:>8} A", format_exp(summary.x2, 2)),
        format!("phi(x_2) = {:8.4} V", summary.phi_x2),
        format!("phi(inf) = {:8.4} V", summary.phi_inf),
        format!("sigma    = {:8.4} e/nm^2", summary.sigma),
        format!("C/A      = {:8.4} muF/cm^2", summary.capacitance),
    ];
    lines.push(xstar_line(summary));
    lines
}

/// `xstar = ...` or the "Could not find xstar" notice.
pub fn xstar_line(summary: &DoubleLayerSummary) -> String {
    match summary.xstar {
        Some(x) => format!("xstar    = {x:8.2} A"),
        None => {
            let (lo, hi) = xstar_bracket(summary.x2);
            format!(
                "Could not find xstar for phi={:3.1} between x={:3.1} and x={:3.1}",
                summary.phi_target, lo, hi
            )
        }
    }
}

/// Extra diagnostic lines printed with `--details`.
pub fn detail_lines(summary: &DoubleLayerSummary) -> Vec<String> {
    vec![
        format!("lambda   = {:>8} A", format_exp(summary.debye_length, 2)),
        format!("B        = {:>8}", format_exp(summary.b, 2)),
        format!("gap(x_1) = {:8.4} V", summary.branch_gap),
    ]
}

/// One row per sweep point; failed points show the error.
pub fn sweep_table(key: &str, points: &[SweepPoint]) -> Vec<String> {
    let mut lines = vec![format!(
        "{:>12} {:>12} {:>12} {:>12} {:>12} {:>12}",
        key, "x_1 [A]", "x_2 [A]", "sigma", "C/A", "xstar [A]"
    )];
    for point in points {
        let row = match &point.outcome {
            Ok(s) => format!(
                "{:>12} {:>12.4} {:>12} {:>12.4} {:>12.4} {:>12}",
                format_exp(point.value, 4),
                s.x1,
                format_exp(s.x2, 3),
                s.sigma,
                s.capacitance,
                s.xstar
                    .map(|x| format!("{x:.2}"))
                    .unwrap_or_else(|| "-".to_string()),
            ),
            Err(e) => format!("{:>12} error: {e}", format_exp(point.value, 4)),
        };
        lines.push(row);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(xstar: Option<f64>) -> DoubleLayerSummary {
        DoubleLayerSummary {
            system: "saturated".to_string(),
            x1: 0.15296334056855532,
            phi_x1: 0.0010584643301241314,
            x2: 29290.80687627073,
            phi_x2: 0.4600886991340572,
            phi_inf: 0.5,
            sigma: -0.007648167028427766,
            capacitance: 0.24507480499212794,
            xstar,
            phi_target: 0.6,
            branch_gap: -0.08313923035268667,
            debye_length: 0.5345412659796981,
            b: 6.005237538420425e9,
        }
    }

    #[test]
    fn test_format_exp_exponent_style() {
        assert_eq!(format_exp(29290.80687627073, 2), "2.93E+04");
        assert_eq!(format_exp(30.755745688449114, 2), "3.08E+01");
        assert_eq!(format_exp(0.000123, 1), "1.2E-04");
        assert_eq!(format_exp(-5.0e120, 2), "-5.00E+120");
        assert_eq!(format_exp(f64::INFINITY, 2), "INF");
    }

    #[test]
    fn test_summary_lines_layout() {
        let lines = summary_lines(&summary(Some(464.8352857446446)));
        assert_eq!(
            lines,
            vec![
                "x_1      =   0.1530 A",
                "phi(x_1) =   0.0011 V",
                "x_2      = 2.93E+04 A",
                "phi(x_2) =   0.4601 V",
                "phi(inf) =   0.5000 V",
                "sigma    =  -0.0076 e/nm^2",
                "C/A      =   0.2451 muF/cm^2",
                "xstar    =   464.84 A",
            ]
        );
    }

    #[test]
    fn test_missing_xstar_line() {
        let line = xstar_line(&summary(None));
        assert_eq!(
            line,
            "Could not find xstar for phi=0.6 between x=0.0 and x=29290.8"
        );
    }

    #[test]
    fn test_detail_lines() {
        let lines = detail_lines(&summary(None));
        assert_eq!(lines[0], "lambda   = 5.35E-01 A");
        assert_eq!(lines[1], "B        = 6.01E+09");
        assert_eq!(lines[2], "gap(x_1) =  -0.0831 V");
    }
}
