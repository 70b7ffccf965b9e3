// Photo library picker. On Android this calls into MainActivity over
// JNI and polls for the result; other platforms report themselves as
// unsupported so the form degrades to a disabled photo input.

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum PickerError {
    PermissionDenied(String),
    Cancelled(String),
    Timeout(String),
    PlatformNotSupported(String),
    Other(String),
}

impl std::fmt::Display for PickerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PickerError::PermissionDenied(msg) => write!(f, "Permission denied: {}", msg),
            PickerError::Cancelled(msg) => write!(f, "Cancelled: {}", msg),
            PickerError::Timeout(msg) => write!(f, "Timeout: {}", msg),
            PickerError::PlatformNotSupported(msg) => write!(f, "Platform not supported: {}", msg),
            PickerError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for PickerError {}

#[cfg(target_os = "android")]
const MAIN_ACTIVITY_CLASS: &str = "dev/dioxus/main/MainActivity";

/// Opens the system gallery picker and waits for the user's choice.
///
/// Returns the absolute path of the selected image. Cancellation is a
/// distinct error so callers can swallow it silently.
#[cfg(target_os = "android")]
pub fn pick_image() -> Result<PathBuf, PickerError> {
    use jni::objects::{JClass, JObject, JString, JValue};

    let vm_ptr = ndk_context::android_context().vm() as *mut *const jni::sys::JNIInvokeInterface_;
    let vm = unsafe { jni::JavaVM::from_raw(vm_ptr) }
        .map_err(|e| PickerError::Other(format!("JavaVM failed: {}", e)))?;
    let mut env = vm
        .attach_current_thread()
        .map_err(|e| PickerError::Other(format!("JNI attach failed: {}", e)))?;

    // Resolve MainActivity through the application class loader; the
    // default JNI FindClass only sees system classes here.
    let loader = app_class_loader(&mut env)?;
    let name: JString = env
        .new_string(MAIN_ACTIVITY_CLASS.replace('/', "."))
        .map_err(|e| PickerError::Other(format!("new_string failed: {}", e)))?;
    let cls_obj = env
        .call_method(
            &loader,
            "loadClass",
            "(Ljava/lang/String;)Ljava/lang/Class;",
            &[JValue::Object(&JObject::from(name))],
        )
        .map_err(|e| PickerError::Other(format!("loadClass failed: {}", e)))?
        .l()
        .map_err(|e| PickerError::Other(format!("loadClass invalid: {}", e)))?;
    let main_cls = JClass::from(cls_obj);

    let signature = format!("()L{};", MAIN_ACTIVITY_CLASS);
    let activity = env
        .call_static_method(&main_cls, "getInstance", &signature, &[])
        .map_err(|e| PickerError::Other(format!("getInstance failed: {}", e)))?
        .l()
        .map_err(|e| PickerError::Other(format!("getInstance invalid: {}", e)))?;
    if activity.is_null() {
        return Err(PickerError::Other(
            "MainActivity instance is null - Activity not initialized?".to_string(),
        ));
    }

    env.call_static_method(&main_cls, "clearLastError", "()V", &[])
        .map_err(|e| PickerError::Other(format!("clearLastError failed: {}", e)))?;
    env.call_method(&activity, "launchImagePicker", "()V", &[])
        .map_err(|e| PickerError::Other(format!("launchImagePicker failed: {}", e)))?;

    // Poll for a result, 60 seconds timeout
    for _ in 0..600 {
        std::thread::sleep(std::time::Duration::from_millis(100));

        if let Some(path) = read_static_string(&mut env, &main_cls, "getLastPhotoPath")? {
            return Ok(PathBuf::from(path));
        }

        if let Some(err) = read_static_string(&mut env, &main_cls, "getLastError")? {
            return Err(if err.to_ascii_lowercase().contains("cancel") {
                PickerError::Cancelled(err)
            } else {
                PickerError::PermissionDenied(err)
            });
        }
    }

    Err(PickerError::Timeout(
        "No picker result after 60 seconds".to_string(),
    ))
}

#[cfg(target_os = "android")]
fn app_class_loader<'a>(
    env: &mut jni::JNIEnv<'a>,
) -> Result<jni::objects::JObject<'a>, PickerError> {
    let at_cls = env
        .find_class("android/app/ActivityThread")
        .map_err(|e| PickerError::Other(format!("ActivityThread not found: {}", e)))?;
    let at = env
        .call_static_method(
            &at_cls,
            "currentActivityThread",
            "()Landroid/app/ActivityThread;",
            &[],
        )
        .map_err(|e| PickerError::Other(format!("currentActivityThread failed: {}", e)))?
        .l()
        .map_err(|e| PickerError::Other(format!("currentActivityThread invalid: {}", e)))?;
    let app = env
        .call_method(&at, "getApplication", "()Landroid/app/Application;", &[])
        .map_err(|e| PickerError::Other(format!("getApplication failed: {}", e)))?
        .l()
        .map_err(|e| PickerError::Other(format!("getApplication invalid: {}", e)))?;

    env.call_method(&app, "getClassLoader", "()Ljava/lang/ClassLoader;", &[])
        .map_err(|e| PickerError::Other(format!("getClassLoader failed: {}", e)))?
        .l()
        .map_err(|e| PickerError::Other(format!("getClassLoader invalid: {}", e)))
}

#[cfg(target_os = "android")]
fn read_static_string(
    env: &mut jni::JNIEnv,
    cls: &jni::objects::JClass,
    method: &str,
) -> Result<Option<String>, PickerError> {
    let result = env
        .call_static_method(cls, method, "()Ljava/lang/String;", &[])
        .map_err(|e| PickerError::Other(format!("{} failed: {}", method, e)))?;
    let obj = result
        .l()
        .map_err(|e| PickerError::Other(format!("{} invalid: {}", method, e)))?;

    if obj.is_null() {
        return Ok(None);
    }

    let value: String = env
        .get_string(&(&obj).into())
        .map_err(|e| PickerError::Other(format!("String conversion failed: {}", e)))?
        .into();
    Ok(Some(value))
}

#[cfg(not(target_os = "android"))]
pub fn pick_image() -> Result<PathBuf, PickerError> {
    Err(PickerError::PlatformNotSupported(
        "Image picking is only available on Android".to_string(),
    ))
}

#[cfg(all(test, not(target_os = "android")))]
mod tests {
    use super::*;

    // callers run the picker through spawn_blocking so the poll loop
    // never stalls the UI executor; the result must come back intact
    #[tokio::test]
    async fn test_pick_image_from_a_blocking_task() {
        let result = tokio::task::spawn_blocking(pick_image).await.unwrap();
        assert!(matches!(
            result,
            Err(PickerError::PlatformNotSupported(_))
        ));
    }
}
