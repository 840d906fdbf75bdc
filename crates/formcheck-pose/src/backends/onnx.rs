use crate::{Device, PoseError, Session};
use formcheck_base::{log, Tensor};
use ndarray::{ArrayD, ArrayViewD};
use ort::session::builder::SessionBuilder;
use ort::{inputs, session::Session as OrtSession, value::TensorRef};
use std::collections::HashMap;
use std::path::Path;

/// ONNX Runtime session for single-input pose models such as YOLOv8-pose.
pub struct OnnxSession {
    session: OrtSession,
    input_names: Vec<String>,
    output_names: Vec<String>,
}

fn backend_error(context: &str) -> impl Fn(ort::Error) -> PoseError + '_ {
    move |e| PoseError::Backend(format!("{context}: {e}"))
}

#[cfg(feature = "cuda")]
fn with_device(builder: SessionBuilder, device: Device) -> Result<SessionBuilder, PoseError> {
    use ort::execution_providers::{CUDAExecutionProvider, ExecutionProvider};

    match device {
        Device::Cpu => Ok(builder),
        Device::Cuda { device_id } => {
            let ep = CUDAExecutionProvider::default().with_device_id(device_id);
            if !ep.is_available().unwrap_or(false) {
                log::warn!("[onnx] CUDA provider not available for {}", device);
            }
            builder
                .with_execution_providers([ep.build()])
                .map_err(|_| PoseError::UnsupportedDevice(device))
        }
    }
}

#[cfg(not(feature = "cuda"))]
fn with_device(builder: SessionBuilder, device: Device) -> Result<SessionBuilder, PoseError> {
    match device {
        Device::Cpu => Ok(builder),
        Device::Cuda { .. } => Err(PoseError::UnsupportedDevice(device)),
    }
}

impl OnnxSession {
    pub fn load(path: &Path, device: Device) -> Result<Self, PoseError> {
        let builder = OrtSession::builder().map_err(backend_error("session builder"))?;
        let mut builder = with_device(builder, device)?;
        log::info!("[onnx] {} on {}", path.display(), device);

        let session = builder.commit_from_file(path).map_err(|e| {
            PoseError::ModelLoad(format!("{}: {}", path.display(), e))
        })?;

        let input_names = session.inputs().iter().map(|i| i.name().to_string()).collect();
        let output_names = session.outputs().iter().map(|o| o.name().to_string()).collect();

        Ok(Self {
            session,
            input_names,
            output_names,
        })
    }
}

impl Session for OnnxSession {
    fn run(
        &mut self,
        inputs: &[(&str, Tensor<f32>)],
    ) -> Result<HashMap<String, Tensor<f32>>, PoseError> {
        let [(name, tensor)] = inputs else {
            return Err(PoseError::Backend(format!(
                "expected exactly 1 input, got {}",
                inputs.len()
            )));
        };

        let array = ArrayD::from_shape_vec(tensor.shape.clone(), tensor.data.clone())
            .map_err(|e| PoseError::Backend(format!("input '{name}': {e}")))?;
        let input = TensorRef::from_array_view(array.view())
            .map_err(backend_error("input tensor"))?;
        let outputs = self
            .session
            .run(inputs![*name => input])
            .map_err(backend_error("inference"))?;

        let mut result = HashMap::new();
        for output_name in &self.output_names {
            let array: ArrayViewD<'_, f32> = outputs[output_name.as_str()]
                .try_extract_array::<f32>()
                .map_err(backend_error("output tensor"))?;
            let tensor = Tensor::new(array.shape().to_vec(), array.iter().copied().collect())?;
            result.insert(output_name.clone(), tensor);
        }

        Ok(result)
    }

    fn input_names(&self) -> &[String] {
        &self.input_names
    }

    fn output_names(&self) -> &[String] {
        &self.output_names
    }
}
