/// Map `x` through the piecewise-linear curve `input -> output`.
///
/// `input` must be ascending and as long as `output`. Values outside the input
/// domain stick to the nearest end, so a progress of 1.3 reads like 1.0.
pub fn interpolate(x: f64, input: &[f64], output: &[f64]) -> f64 {
    debug_assert_eq!(input.len(), output.len());
    let len = input.len().min(output.len());
    if len == 0 {
        return 0.0;
    }
    if len == 1 || x.is_nan() || x <= input[0] {
        return output[0];
    }
    if x >= input[len - 1] {
        return output[len - 1];
    }

    let segment = input[..len].windows(2).position(|w| x < w[1]).unwrap_or(len - 2);
    let (x0, x1) = (input[segment], input[segment + 1]);
    let (y0, y1) = (output[segment], output[segment + 1]);
    if x1 <= x0 {
        return y1;
    }
    y0 + (x - x0) / (x1 - x0) * (y1 - y0)
}

/// Pointer position across a box, from -0.5 at its start to 0.5 at its end.
pub fn pointer_offset(client: f64, start: f64, size: f64) -> f64 {
    if !size.is_finite() || size <= 0.0 {
        return 0.0;
    }
    ((client - start) / size - 0.5).clamp(-0.5, 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn two_point_ranges() {
        // parallax: [0, 1] -> [40, -40]
        assert!(close(interpolate(0.0, &[0.0, 1.0], &[40.0, -40.0]), 40.0));
        assert!(close(interpolate(0.5, &[0.0, 1.0], &[40.0, -40.0]), 0.0));
        assert!(close(interpolate(0.75, &[0.0, 1.0], &[40.0, -40.0]), -20.0));
    }

    #[test]
    fn multi_segment_fade() {
        let input = [0.0, 0.2, 0.9, 1.0];
        let output = [0.0, 1.0, 1.0, 0.0];
        assert!(close(interpolate(0.1, &input, &output), 0.5));
        assert!(close(interpolate(0.5, &input, &output), 1.0));
        assert!(close(interpolate(0.95, &input, &output), 0.5));
    }

    #[test]
    fn clamps_outside_domain() {
        assert_eq!(interpolate(-3.0, &[0.2, 0.4], &[0.0, 1.0]), 0.0);
        assert_eq!(interpolate(9.0, &[0.2, 0.4], &[0.0, 1.0]), 1.0);
        assert_eq!(interpolate(f64::NAN, &[0.2, 0.4], &[0.5, 1.0]), 0.5);
    }

    #[test]
    fn degenerate_curves() {
        assert_eq!(interpolate(0.5, &[], &[]), 0.0);
        assert_eq!(interpolate(0.5, &[0.3], &[7.0]), 7.0);
        // vertical step
        assert_eq!(interpolate(0.5, &[0.0, 0.5, 0.5, 1.0], &[0.0, 0.0, 1.0, 1.0]), 1.0);
    }

    #[test]
    fn pointer_offset_is_centred() {
        assert_eq!(pointer_offset(150.0, 100.0, 100.0), 0.0);
        assert_eq!(pointer_offset(100.0, 100.0, 100.0), -0.5);
        assert_eq!(pointer_offset(400.0, 100.0, 100.0), 0.5);
        assert_eq!(pointer_offset(10.0, 0.0, 0.0), 0.0);
    }
}
