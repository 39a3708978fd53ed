// src/data_input/log_data.rs

use ndarray::Array1;

/// One row of controller telemetry after numeric conversion.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: i64,         // Timestamp (ms).
    pub setpoint: f64,     // Target value.
    pub measurement: f64,  // Observed process value.
    pub error: f64,        // measurement - setpoint, derived.
    pub output: f64,       // Controller output.
    pub p: f64,            // Proportional contribution.
    pub i: f64,            // Integral contribution.
    pub d: f64,            // Derivative contribution.
}

impl Sample {
    /// Builds a sample and derives `error` as `measurement - setpoint`.
    ///
    /// The sign is the logger's convention and is kept as-is, even though
    /// most PID literature uses `setpoint - measurement`.
    pub fn new(
        time: i64,
        setpoint: f64,
        measurement: f64,
        output: f64,
        p: f64,
        i: f64,
        d: f64,
    ) -> Self {
        Self {
            time,
            setpoint,
            measurement,
            error: measurement - setpoint,
            output,
            p,
            i,
            d,
        }
    }
}

/// The eight index-aligned columns of a log, in input order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PidColumns {
    pub time: Array1<i64>,
    pub setpoint: Array1<f64>,
    pub measurement: Array1<f64>,
    pub error: Array1<f64>,
    pub output: Array1<f64>,
    pub p: Array1<f64>,
    pub i: Array1<f64>,
    pub d: Array1<f64>,
}

impl PidColumns {
    pub fn from_samples(samples: &[Sample]) -> Self {
        Self {
            time: samples.iter().map(|s| s.time).collect(),
            setpoint: samples.iter().map(|s| s.setpoint).collect(),
            measurement: samples.iter().map(|s| s.measurement).collect(),
            error: samples.iter().map(|s| s.error).collect(),
            output: samples.iter().map(|s| s.output).collect(),
            p: samples.iter().map(|s| s.p).collect(),
            i: samples.iter().map(|s| s.i).collect(),
            d: samples.iter().map(|s| s.d).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Reassembles the sample at `index`, if any.
    pub fn sample(&self, index: usize) -> Option<Sample> {
        if index >= self.len() {
            return None;
        }
        Some(Sample {
            time: self.time[index],
            setpoint: self.setpoint[index],
            measurement: self.measurement[index],
            error: self.error[index],
            output: self.output[index],
            p: self.p[index],
            i: self.i[index],
            d: self.d[index],
        })
    }

    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        (0..self.len()).filter_map(move |index| self.sample(index))
    }

    /// First and last timestamps, in file order.
    pub fn time_span(&self) -> Option<(i64, i64)> {
        Some((*self.time.first()?, *self.time.last()?))
    }

    /// Timestamps converted for plotting on a floating-point axis.
    pub fn time_as_f64(&self) -> Array1<f64> {
        self.time.mapv(|t| t as f64)
    }
}
