use crate::error::MinigradError;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::value::Value;

/// Ordered container feeding each module's output into the next one.
///
/// Children keep their insertion order for `forward`, `parameters` and
/// `named_parameters`.
#[derive(Debug, Default)]
pub struct Sequential {
    modules: Vec<(String, Box<dyn Module>)>,
}

impl Sequential {
    pub fn new() -> Self {
        Sequential {
            modules: Vec::new(),
        }
    }

    pub fn add_module(&mut self, name: &str, module: Box<dyn Module>) {
        self.modules.push((name.to_string(), module));
    }

    /// Builder-style variant of [`Sequential::add_module`].
    pub fn with_module(mut self, name: &str, module: impl Module + 'static) -> Self {
        self.add_module(name, Box::new(module));
        self
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn named_children(&self) -> Vec<(&str, &dyn Module)> {
        self.modules
            .iter()
            .map(|(name, m)| (name.as_str(), m.as_ref()))
            .collect()
    }
}

impl Module for Sequential {
    /// An empty container returns its input unchanged.
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, MinigradError> {
        let mut current_input = input.to_vec();
        for (_, module) in &self.modules {
            current_input = module.forward(&current_input)?;
        }
        Ok(current_input)
    }

    fn parameters(&self) -> Vec<&Parameter> {
        let mut params = Vec::new();
        for (_, module) in &self.modules {
            params.extend(module.parameters());
        }
        params
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        let mut params = Vec::new();
        for (name, module) in &self.modules {
            for (param_name, param) in module.named_parameters() {
                params.push((format!("{}.{}", name, param_name), param));
            }
        }
        params
    }

    fn children(&self) -> Vec<&dyn Module> {
        self.modules.iter().map(|(_, m)| m.as_ref()).collect()
    }
}

#[cfg(test)]
#[path = "sequential_test.rs"]
mod tests;
