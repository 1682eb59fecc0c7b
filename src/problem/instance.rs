use super::color::{Color, CostKind};
use super::error::InstanceError;
use crate::matrix::ResourceMatrix;
use serde::{Deserialize, Serialize};

/// Serialized description of one server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSpec {
    /// Capacity threshold per resource.
    pub capacity: Vec<f64>,
    /// Relocation cost the server absorbs per resource before overhead accrues.
    pub overhead_threshold: Vec<f64>,
}

/// Serialized description of one disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiskSpec {
    /// Initial server (zero-based).
    pub server: usize,
    pub color: Color,
    /// Demand indexed `[resource][time]`.
    pub demand: Vec<Vec<f64>>,
    /// Insertion cost indexed `[server][resource]`. Empty means free.
    #[serde(default)]
    pub insert_cost: Vec<Vec<f64>>,
    /// Erasure cost indexed `[server][resource]`. Empty means free.
    #[serde(default)]
    pub erase_cost: Vec<Vec<f64>>,
}

/// Serialized problem instance, as read from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceSpec {
    pub resources: usize,
    pub times: usize,
    pub servers: Vec<ServerSpec>,
    pub disks: Vec<DiskSpec>,
}

/// One entry of a distribution: where a disk lives and how constrained it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub server: usize,
    pub color: Color,
}

/// Validated, read-only problem description.
///
/// Solutions borrow it for their whole lifetime and never mutate it.
#[derive(Debug, Clone)]
pub struct ProblemInstance {
    disks: usize,
    servers: usize,
    resources: usize,
    times: usize,
    initial: Vec<Placement>,
    capacity_threshold: ResourceMatrix,
    overhead_threshold: ResourceMatrix,
    /// `[disk][resource][time]`
    demand: Vec<f64>,
    /// `[disk][server][resource]`
    insert_cost: Vec<f64>,
    /// `[disk][server][resource]`
    erase_cost: Vec<f64>,
}

impl ProblemInstance {
    /// Validate a spec and build the flat lookup tables.
    pub fn from_spec(spec: InstanceSpec) -> Result<Self, InstanceError> {
        let InstanceSpec { resources, times, servers: server_specs, disks: disk_specs } = spec;
        let servers = server_specs.len();
        let disks = disk_specs.len();

        if servers == 0 {
            return Err(InstanceError::Empty("server"));
        }
        if resources == 0 {
            return Err(InstanceError::Empty("resource"));
        }
        if times == 0 {
            return Err(InstanceError::Empty("time period"));
        }

        let mut capacity_threshold = ResourceMatrix::filled(servers, resources, 0.0);
        let mut overhead_threshold = ResourceMatrix::filled(servers, resources, 0.0);
        for (server, s) in server_specs.iter().enumerate() {
            check_row(&format!("servers[{server}].capacity"), &s.capacity, resources)?;
            check_row(
                &format!("servers[{server}].overhead_threshold"),
                &s.overhead_threshold,
                resources,
            )?;
            for resource in 0..resources {
                capacity_threshold[(server, resource)] = s.capacity[resource];
                overhead_threshold[(server, resource)] = s.overhead_threshold[resource];
            }
        }

        let mut initial = Vec::with_capacity(disks);
        let mut demand = Vec::with_capacity(disks * resources * times);
        let mut insert_cost = Vec::with_capacity(disks * servers * resources);
        let mut erase_cost = Vec::with_capacity(disks * servers * resources);

        for (disk, d) in disk_specs.into_iter().enumerate() {
            if d.server >= servers {
                return Err(InstanceError::ServerOutOfRange { disk, server: d.server, servers });
            }
            if d.color == Color::None {
                return Err(InstanceError::UncoloredDisk(disk));
            }
            initial.push(Placement { server: d.server, color: d.color });

            check_table(&format!("disks[{disk}].demand"), &d.demand, resources, times)?;
            demand.extend(d.demand.iter().flatten().copied());

            for (table, name, out) in [
                (&d.insert_cost, "insert_cost", &mut insert_cost),
                (&d.erase_cost, "erase_cost", &mut erase_cost),
            ] {
                if table.is_empty() {
                    out.resize(out.len() + servers * resources, 0.0);
                } else {
                    check_table(&format!("disks[{disk}].{name}"), table, servers, resources)?;
                    out.extend(table.iter().flatten().copied());
                }
            }
        }

        Ok(Self {
            disks,
            servers,
            resources,
            times,
            initial,
            capacity_threshold,
            overhead_threshold,
            demand,
            insert_cost,
            erase_cost,
        })
    }

    /// Parse and validate a JSON instance.
    pub fn from_json_str(json: &str) -> Result<Self, InstanceError> {
        let spec: InstanceSpec = serde_json::from_str(json)?;
        Self::from_spec(spec)
    }

    pub const fn num_disks(&self) -> usize {
        self.disks
    }

    pub const fn num_servers(&self) -> usize {
        self.servers
    }

    pub const fn num_resources(&self) -> usize {
        self.resources
    }

    pub const fn num_times(&self) -> usize {
        self.times
    }

    pub fn initial_distribution(&self) -> &[Placement] {
        &self.initial
    }

    pub fn threshold_capacity(&self, server: usize, resource: usize) -> f64 {
        self.capacity_threshold[(server, resource)]
    }

    pub const fn threshold_overheads(&self) -> &ResourceMatrix {
        &self.overhead_threshold
    }

    /// Demand of `disk` for `resource` during `time`.
    pub fn demand(&self, disk: usize, resource: usize, time: usize) -> f64 {
        debug_assert!(disk < self.disks, "disk {disk} out of range");
        self.demand[(disk * self.resources + resource) * self.times + time]
    }

    /// Cost of inserting or erasing `disk` at `server` for `resource`.
    pub fn disk_cost(&self, kind: CostKind, disk: usize, server: usize, resource: usize) -> f64 {
        debug_assert!(disk < self.disks, "disk {disk} out of range");
        debug_assert!(server < self.servers, "server {server} out of range");
        let offset = (disk * self.servers + server) * self.resources + resource;
        match kind {
            CostKind::Insert => self.insert_cost[offset],
            CostKind::Erase => self.erase_cost[offset],
        }
    }
}

fn check_row(what: &str, row: &[f64], expected: usize) -> Result<(), InstanceError> {
    if row.len() != expected {
        return Err(InstanceError::Dimension {
            what: what.to_string(),
            expected,
            actual: row.len(),
        });
    }
    if row.iter().any(|v| !v.is_finite()) {
        return Err(InstanceError::NonFinite(what.to_string()));
    }
    Ok(())
}

fn check_table(
    what: &str,
    table: &[Vec<f64>],
    rows: usize,
    cols: usize,
) -> Result<(), InstanceError> {
    if table.len() != rows {
        return Err(InstanceError::Dimension {
            what: what.to_string(),
            expected: rows,
            actual: table.len(),
        });
    }
    for (i, row) in table.iter().enumerate() {
        check_row(&format!("{what}[{i}]"), row, cols)?;
    }
    Ok(())
}
