use crate::error::{ChartError, ChartResult};

/// Linear mapping from a data domain onto a pixel span.
///
/// With `inverted` set, `domain_end` maps to `pixel_offset` and
/// `domain_start` to `pixel_offset + pixel_extent`, which is how the y axis
/// places larger values higher on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    pixel_offset: f64,
    pixel_extent: f64,
    inverted: bool,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        pixel_offset: f64,
        pixel_extent: f64,
    ) -> ChartResult<Self> {
        if !domain_start.is_finite()
            || !domain_end.is_finite()
            || domain_end <= domain_start
            || !(domain_end - domain_start).is_finite()
        {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and increasing with a finite span".to_owned(),
            ));
        }
        if !pixel_offset.is_finite() || !pixel_extent.is_finite() || pixel_extent <= 0.0 {
            return Err(ChartError::InvalidData(
                "scale pixel span must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            pixel_offset,
            pixel_extent,
            inverted: false,
        })
    }

    #[must_use]
    pub fn inverted(mut self) -> Self {
        self.inverted = true;
        self
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn pixel_range(self) -> (f64, f64) {
        (self.pixel_offset, self.pixel_offset + self.pixel_extent)
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.domain_end - self.domain_start
    }

    pub fn domain_to_pixel(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let distance = if self.inverted {
            self.domain_end - value
        } else {
            value - self.domain_start
        };
        let pixel = distance / self.span() * self.pixel_extent + self.pixel_offset;
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "value {value} is outside the representable pixel range"
            )));
        }
        Ok(pixel)
    }

    pub fn pixel_to_domain(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let distance = (pixel - self.pixel_offset) / self.pixel_extent * self.span();
        Ok(if self.inverted {
            self.domain_end - distance
        } else {
            self.domain_start + distance
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_domain() {
        assert!(LinearScale::new(2.0, 2.0, 0.0, 100.0).is_err());
        assert!(LinearScale::new(3.0, 2.0, 0.0, 100.0).is_err());
    }

    #[test]
    fn rejects_domain_whose_span_overflows() {
        assert!(LinearScale::new(-1e308, 1e308, 0.0, 100.0).is_err());
        assert!(LinearScale::new(-f64::MAX, 0.0, 0.0, 100.0).is_ok());
    }

    #[test]
    fn rejects_empty_pixel_span() {
        assert!(LinearScale::new(0.0, 1.0, 10.0, 0.0).is_err());
    }

    #[test]
    fn inverted_scale_puts_domain_end_at_offset() {
        let scale = LinearScale::new(0.0, 2.0, 50.0, 100.0)
            .expect("valid scale")
            .inverted();
        assert_eq!(scale.domain_to_pixel(2.0).expect("top"), 50.0);
        assert_eq!(scale.domain_to_pixel(0.0).expect("bottom"), 150.0);
        assert_eq!(scale.pixel_to_domain(100.0).expect("middle"), 1.0);
    }
}
