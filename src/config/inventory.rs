//! Inventory generation configuration

use serde::{Deserialize, Serialize};

/// One inventory host fed by a Terraform output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryHost {
    /// Inventory hostname (e.g. `aws-vpn-host`)
    pub name: String,
    /// Terraform output holding the host's address
    pub output: String,
    /// Value for `ansible_user`
    pub user: String,
}

impl InventoryHost {
    pub fn new(name: &str, output: &str, user: &str) -> Self {
        Self {
            name: name.to_string(),
            output: output.to_string(),
            user: user.to_string(),
        }
    }
}

/// Inventory configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Host group section name
    pub group: String,
    /// Written under `[all:vars]`
    pub python_interpreter: String,
    pub hosts: Vec<InventoryHost>,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            group: "vpn_hosts".to_string(),
            python_interpreter: "/usr/bin/python3".to_string(),
            hosts: vec![
                InventoryHost::new("aws-vpn-host", "aws_instance_public_ip", "ubuntu"),
                InventoryHost::new("oci-vpn-host", "oci_instance_public_ip", "opc"),
            ],
        }
    }
}
