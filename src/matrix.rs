//! Dense row-major `f64` matrices used for capacity and overhead accounting.

use std::ops::{Index, IndexMut};

/// `server × resource` matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceMatrix {
    servers: usize,
    resources: usize,
    data: Vec<f64>,
}

impl ResourceMatrix {
    pub fn filled(servers: usize, resources: usize, value: f64) -> Self {
        Self { servers, resources, data: vec![value; servers * resources] }
    }

    fn offset(&self, server: usize, resource: usize) -> usize {
        debug_assert!(server < self.servers, "server {server} out of range");
        debug_assert!(resource < self.resources, "resource {resource} out of range");
        server * self.resources + resource
    }
}

impl Index<(usize, usize)> for ResourceMatrix {
    type Output = f64;

    fn index(&self, (server, resource): (usize, usize)) -> &f64 {
        &self.data[self.offset(server, resource)]
    }
}

impl IndexMut<(usize, usize)> for ResourceMatrix {
    fn index_mut(&mut self, (server, resource): (usize, usize)) -> &mut f64 {
        let offset = self.offset(server, resource);
        &mut self.data[offset]
    }
}

/// `server × time × resource` matrix of signed load relative to threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct CapacityMatrix {
    servers: usize,
    times: usize,
    resources: usize,
    data: Vec<f64>,
}

impl CapacityMatrix {
    pub fn zeroed(servers: usize, times: usize, resources: usize) -> Self {
        Self { servers, times, resources, data: vec![0.0; servers * times * resources] }
    }

    /// Sum of the positive cells.
    pub fn positive_sum(&self) -> f64 {
        self.data.iter().filter(|v| **v > 0.0).sum()
    }

    /// Largest absolute cell-wise difference to `other`.
    ///
    /// Both matrices must have the same shape.
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        assert!(
            self.servers == other.servers
                && self.times == other.times
                && self.resources == other.resources,
            "capacity matrices differ in shape"
        );
        self.data.iter().zip(&other.data).map(|(a, b)| (a - b).abs()).fold(0.0_f64, f64::max)
    }

    fn offset(&self, server: usize, time: usize, resource: usize) -> usize {
        debug_assert!(server < self.servers, "server {server} out of range");
        debug_assert!(time < self.times, "time {time} out of range");
        debug_assert!(resource < self.resources, "resource {resource} out of range");
        (server * self.times + time) * self.resources + resource
    }
}

impl Index<(usize, usize, usize)> for CapacityMatrix {
    type Output = f64;

    fn index(&self, (server, time, resource): (usize, usize, usize)) -> &f64 {
        &self.data[self.offset(server, time, resource)]
    }
}

impl IndexMut<(usize, usize, usize)> for CapacityMatrix {
    fn index_mut(&mut self, (server, time, resource): (usize, usize, usize)) -> &mut f64 {
        let offset = self.offset(server, time, resource);
        &mut self.data[offset]
    }
}
