//! wasm-bindgen adapter for the Skottie binding layer.
//!
//! Implements the host-runtime seam over the JS realm's global object and
//! wires JS callbacks into the platform-context and backend seams. Calling
//! [`install_bindings`] once at startup publishes `SkiaApi_SkottieCtor`;
//! scripts then invoke it with one source argument and get back a
//! [`Skottie`] handle.

use js_sys::{Function, Object, Reflect, Uint8Array};
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use std::sync::Arc;

use skottie_bindings_core::{
    AnimationInfo, BindingConfig, BindingError, HostCallable, HostRuntime, PlaybackState,
    PlatformContext, ResizeMode, SkottieAnimation, SkottieBackend, SkottieHandle,
};

/// Platform context backed by an optional JS `loadUri` callback.
///
/// The callback takes a URI string and returns the source bytes as a
/// `Uint8Array` or string; returning null/undefined means the URI cannot
/// be served.
pub struct JsPlatformContext {
    loader: Option<Function>,
}

impl JsPlatformContext {
    pub fn new(loader: Option<Function>) -> Self {
        Self { loader }
    }
}

impl PlatformContext for JsPlatformContext {
    fn fetch(&self, uri: &str) -> Result<Vec<u8>, BindingError> {
        let loader = self
            .loader
            .as_ref()
            .ok_or_else(|| BindingError::SourceFetch {
                uri: uri.to_string(),
                reason: "platform context has no loadUri callback".to_string(),
            })?;
        let result = loader
            .call1(&JsValue::UNDEFINED, &JsValue::from_str(uri))
            .map_err(|e| BindingError::SourceFetch {
                uri: uri.to_string(),
                reason: format!("loadUri threw: {e:?}"),
            })?;
        if result.is_undefined() || result.is_null() {
            return Err(BindingError::SourceFetch {
                uri: uri.to_string(),
                reason: "loadUri returned no data".to_string(),
            });
        }
        if let Some(text) = result.as_string() {
            return Ok(text.into_bytes());
        }
        match result.dyn_into::<Uint8Array>() {
            Ok(buffer) => Ok(buffer.to_vec()),
            Err(_) => Err(BindingError::SourceFetch {
                uri: uri.to_string(),
                reason: "loadUri must return a string or Uint8Array".to_string(),
            }),
        }
    }
}

struct JsAnimation {
    info: AnimationInfo,
}

impl SkottieAnimation for JsAnimation {
    fn info(&self) -> AnimationInfo {
        self.info
    }
}

/// Backend backed by a JS `makeAnimation` callback.
///
/// The callback receives the source bytes as a `Uint8Array` and returns
/// `{ duration, fps, width, height }` for the built animation.
pub struct JsBackend {
    make: Function,
}

impl JsBackend {
    pub fn new(make: Function) -> Self {
        Self { make }
    }
}

impl SkottieBackend for JsBackend {
    fn make_animation(&self, bytes: &[u8]) -> Result<Box<dyn SkottieAnimation>, BindingError> {
        let buffer = Uint8Array::from(bytes);
        let built = self
            .make
            .call1(&JsValue::UNDEFINED, &buffer)
            .map_err(|e| BindingError::Backend {
                reason: format!("makeAnimation threw: {e:?}"),
            })?;
        let info: AnimationInfo = swb::from_value(built).map_err(|e| BindingError::Backend {
            reason: format!("makeAnimation returned a bad shape: {e}"),
        })?;
        Ok(Box::new(JsAnimation { info }))
    }
}

/// Host-runtime seam over a JS global object.
pub struct JsGlobalRuntime {
    global: Object,
}

impl JsGlobalRuntime {
    /// Runtime handle for the realm this module is running in.
    pub fn current() -> Self {
        Self {
            global: js_sys::global(),
        }
    }

    /// Runtime handle over an explicit global object (worker scopes,
    /// tests).
    pub fn with_global(global: Object) -> Self {
        Self { global }
    }
}

fn define_value_prop(target: &Object, key: &str, value: &JsValue) -> Result<(), JsValue> {
    let desc = Object::new();
    Reflect::set(&desc, &JsValue::from_str("value"), value)?;
    Reflect::set(&desc, &JsValue::from_str("configurable"), &JsValue::TRUE)?;
    Object::define_property(target, &JsValue::from_str(key), &desc);
    Ok(())
}

impl HostRuntime for JsGlobalRuntime {
    type Error = JsValue;

    fn register_ctor(
        &mut self,
        key: &str,
        display_name: &str,
        arity: u32,
        mut callable: HostCallable,
    ) -> Result<(), Self::Error> {
        let ctor = Closure::wrap(Box::new(move |arg: JsValue| -> Result<JsValue, JsValue> {
            let raw: serde_json::Value = swb::from_value(arg).map_err(|e| {
                JsValue::from(js_sys::Error::new(&format!(
                    "could not read source argument: {e}"
                )))
            })?;
            let handle =
                callable(raw).map_err(|e| JsValue::from(js_sys::Error::new(&e.to_string())))?;
            Ok(Skottie::from_handle(handle).into())
        })
            as Box<dyn FnMut(JsValue) -> Result<JsValue, JsValue>>);

        let func: Function = ctor.as_ref().unchecked_ref::<Function>().clone();
        // The registered binding lives for the rest of the realm's
        // lifetime.
        ctor.forget();

        // Closure-backed functions come up anonymous and nullary; restore
        // the declared display name and argument count.
        define_value_prop(&func, "name", &JsValue::from_str(display_name))?;
        define_value_prop(&func, "length", &JsValue::from_f64(arity as f64))?;

        Reflect::set(&self.global, &JsValue::from_str(key), &func)?;
        Ok(())
    }
}

/// Script-facing animation handle returned by the installed ctor.
#[wasm_bindgen]
pub struct Skottie {
    inner: SkottieHandle,
}

impl Skottie {
    fn from_handle(inner: SkottieHandle) -> Self {
        Self { inner }
    }
}

#[wasm_bindgen]
impl Skottie {
    pub fn start(&mut self) {
        self.inner.play();
    }

    pub fn pause(&mut self) {
        self.inner.pause();
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Move the playhead to a normalized position in `[0, 1]`.
    #[wasm_bindgen(js_name = setProgress)]
    pub fn set_progress(&mut self, progress: f32) {
        self.inner.set_progress(progress);
    }

    #[wasm_bindgen(js_name = setSpeed)]
    pub fn set_speed(&mut self, speed: f32) {
        self.inner.set_speed(speed);
    }

    #[wasm_bindgen(js_name = setLooping)]
    pub fn set_looping(&mut self, looping: bool) {
        self.inner.set_looping(looping);
    }

    /// Accepts `"cover" | "contain" | "stretch"`.
    #[wasm_bindgen(js_name = setScaleType)]
    pub fn set_scale_type(&mut self, mode: JsValue) -> Result<(), JsError> {
        let mode: ResizeMode =
            swb::from_value(mode).map_err(|e| JsError::new(&format!("setScaleType: {e}")))?;
        self.inner.set_resize_mode(mode);
        Ok(())
    }

    /// Rescale playback to span `duration` seconds; pass undefined/null
    /// to restore the intrinsic duration.
    #[wasm_bindgen(js_name = setDuration)]
    pub fn set_duration(&mut self, duration: Option<f32>) {
        self.inner.set_duration_override(duration);
    }

    pub fn duration(&self) -> f32 {
        self.inner.duration()
    }

    pub fn fps(&self) -> f32 {
        self.inner.fps()
    }

    pub fn progress(&self) -> f32 {
        self.inner.progress()
    }

    #[wasm_bindgen(js_name = isPlaying)]
    pub fn is_playing(&self) -> bool {
        self.inner.state() == PlaybackState::Playing
    }

    /// Static clip facts as `{ duration, fps, width, height }`.
    pub fn info(&self) -> Result<JsValue, JsError> {
        swb::to_value(&self.inner.info()).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Advance playback by `dt` seconds. Returns the finish event for
    /// this step, or undefined.
    pub fn update(&mut self, dt: f32) -> Result<JsValue, JsError> {
        swb::to_value(&self.inner.update(dt)).map_err(|e| JsError::new(&e.to_string()))
    }
}

/// Install the Skottie ctor onto the current realm's global object.
///
/// `context` carries the embedder callbacks:
///
/// ```javascript
/// installBindings({
///   makeAnimation: (bytes) => ({ duration, fps, width, height }),
///   loadUri: (uri) => bytesOrString, // optional
///   defaults: { autoPlay: true, loop: true }, // optional
/// });
/// const skottie = SkiaApi_SkottieCtor(source);
/// ```
#[wasm_bindgen(js_name = installBindings)]
pub fn install_bindings(context: JsValue) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let make = Reflect::get(&context, &JsValue::from_str("makeAnimation"))
        .ok()
        .and_then(|v| v.dyn_into::<Function>().ok())
        .ok_or_else(|| {
            JsValue::from(js_sys::Error::new(
                "installBindings: context.makeAnimation must be a function",
            ))
        })?;
    let loader = Reflect::get(&context, &JsValue::from_str("loadUri"))
        .ok()
        .and_then(|v| v.dyn_into::<Function>().ok());
    let config = match Reflect::get(&context, &JsValue::from_str("defaults")) {
        Ok(v) if !v.is_undefined() && !v.is_null() => swb::from_value(v).map_err(|e| {
            JsValue::from(js_sys::Error::new(&format!(
                "installBindings: bad defaults: {e}"
            )))
        })?,
        _ => BindingConfig::default(),
    };

    let mut runtime = JsGlobalRuntime::current();
    skottie_bindings_core::install_bindings_with(
        &mut runtime,
        Arc::new(JsPlatformContext::new(loader)),
        Arc::new(JsBackend::new(make)),
        config,
    )
}
