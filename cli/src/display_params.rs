use tfnorm_tensorflow::prelude::*;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayParams {
    pub node_names: Vec<String>,
    pub op_names: Vec<String>,
    pub json: bool,
}

impl DisplayParams {
    pub fn from_clap(matches: &clap::ArgMatches) -> DisplayParams {
        let strings = |name: &str| -> Vec<String> {
            matches.values_of(name).map(|v| v.map(String::from).collect()).unwrap_or_default()
        };
        DisplayParams {
            node_names: strings("node_name"),
            op_names: strings("op_name"),
            json: matches.is_present("json"),
        }
    }

    /// With no selection at all, every node is shown.
    pub fn filter(&self, node: &NodeDef) -> bool {
        if !self.node_names.is_empty()
            && !self.node_names.iter().any(|n| node.name.starts_with(&**n))
        {
            return false;
        }
        if !self.op_names.is_empty() && !self.op_names.iter().any(|op| node.op == *op) {
            return false;
        }
        true
    }
}
