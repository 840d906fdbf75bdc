use crate::PoseError;
use formcheck_base::Tensor;
use std::collections::HashMap;

/// A loaded model that maps named input tensors to named output tensors.
pub trait Session: Send {
    fn run(
        &mut self,
        inputs: &[(&str, Tensor<f32>)],
    ) -> Result<HashMap<String, Tensor<f32>>, PoseError>;
    fn input_names(&self) -> &[String];
    fn output_names(&self) -> &[String];
}
