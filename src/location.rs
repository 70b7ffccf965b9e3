// Device location provider. Same JNI launch-and-poll mechanism as the
// photo picker; MainActivity answers with "latitude,longitude" once the
// platform delivered a fix, or with an error when permission is denied.

use crate::error::AppError;
use crate::models::GeoPosition;

#[cfg(target_os = "android")]
const MAIN_ACTIVITY_CLASS: &str = "dev/dioxus/main/MainActivity";

/// Asks the device for its current position.
///
/// Triggers the system permission prompt when permission was not
/// granted yet; a denial surfaces as [`AppError::PermissionDenied`].
#[cfg(target_os = "android")]
pub fn current_position() -> Result<GeoPosition, AppError> {
    use jni::objects::{JClass, JObject, JString, JValue};

    let vm_ptr = ndk_context::android_context().vm() as *mut *const jni::sys::JNIInvokeInterface_;
    let vm = unsafe { jni::JavaVM::from_raw(vm_ptr) }
        .map_err(|e| AppError::Other(format!("JavaVM failed: {}", e)))?;
    let mut env = vm
        .attach_current_thread()
        .map_err(|e| AppError::Other(format!("JNI attach failed: {}", e)))?;

    let at_cls = env
        .find_class("android/app/ActivityThread")
        .map_err(|e| AppError::Other(format!("ActivityThread not found: {}", e)))?;
    let at = env
        .call_static_method(
            &at_cls,
            "currentActivityThread",
            "()Landroid/app/ActivityThread;",
            &[],
        )
        .and_then(|v| v.l())
        .map_err(|e| AppError::Other(format!("currentActivityThread failed: {}", e)))?;
    let app = env
        .call_method(&at, "getApplication", "()Landroid/app/Application;", &[])
        .and_then(|v| v.l())
        .map_err(|e| AppError::Other(format!("getApplication failed: {}", e)))?;
    let loader = env
        .call_method(&app, "getClassLoader", "()Ljava/lang/ClassLoader;", &[])
        .and_then(|v| v.l())
        .map_err(|e| AppError::Other(format!("getClassLoader failed: {}", e)))?;

    let name: JString = env
        .new_string(MAIN_ACTIVITY_CLASS.replace('/', "."))
        .map_err(|e| AppError::Other(format!("new_string failed: {}", e)))?;
    let main_cls = JClass::from(
        env.call_method(
            &loader,
            "loadClass",
            "(Ljava/lang/String;)Ljava/lang/Class;",
            &[JValue::Object(&JObject::from(name))],
        )
        .and_then(|v| v.l())
        .map_err(|e| AppError::Other(format!("loadClass failed: {}", e)))?,
    );

    let signature = format!("()L{};", MAIN_ACTIVITY_CLASS);
    let activity = env
        .call_static_method(&main_cls, "getInstance", &signature, &[])
        .and_then(|v| v.l())
        .map_err(|e| AppError::Other(format!("getInstance failed: {}", e)))?;
    if activity.is_null() {
        return Err(AppError::Other(
            "MainActivity instance is null - Activity not initialized?".to_string(),
        ));
    }

    env.call_static_method(&main_cls, "clearLastError", "()V", &[])
        .map_err(|e| AppError::Other(format!("clearLastError failed: {}", e)))?;
    env.call_method(&activity, "requestLocation", "()V", &[])
        .map_err(|e| AppError::Other(format!("requestLocation failed: {}", e)))?;

    // Poll for a fix, 30 seconds timeout
    for _ in 0..300 {
        std::thread::sleep(std::time::Duration::from_millis(100));

        let result = env
            .call_static_method(&main_cls, "getLastLocationString", "()Ljava/lang/String;", &[])
            .and_then(|v| v.l());
        if let Ok(obj) = result {
            if !obj.is_null() {
                let value: String = env
                    .get_string(&(&obj).into())
                    .map_err(|e| AppError::Other(format!("String conversion failed: {}", e)))?
                    .into();
                return parse_location(&value);
            }
        }

        let error = env
            .call_static_method(&main_cls, "getLastError", "()Ljava/lang/String;", &[])
            .and_then(|v| v.l());
        if let Ok(obj) = error {
            if !obj.is_null() {
                let msg: String = env
                    .get_string(&(&obj).into())
                    .map_err(|e| AppError::Other(format!("String conversion failed: {}", e)))?
                    .into();
                return Err(AppError::PermissionDenied(msg));
            }
        }
    }

    Err(AppError::Other(
        "No location fix after 30 seconds".to_string(),
    ))
}

#[cfg(not(target_os = "android"))]
pub fn current_position() -> Result<GeoPosition, AppError> {
    Err(AppError::PermissionDenied(
        "Location is only available on Android".to_string(),
    ))
}

/// Parses the "latitude,longitude" string the activity hands back.
#[allow(dead_code)]
fn parse_location(value: &str) -> Result<GeoPosition, AppError> {
    let (lat, lng) = value
        .split_once(',')
        .ok_or_else(|| AppError::Other(format!("Malformed location: {}", value)))?;

    let latitude = lat
        .trim()
        .parse::<f64>()
        .map_err(|e| AppError::Other(format!("Malformed latitude: {}", e)))?;
    let longitude = lng
        .trim()
        .parse::<f64>()
        .map_err(|e| AppError::Other(format!("Malformed longitude: {}", e)))?;

    Ok(GeoPosition {
        latitude,
        longitude,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_location() {
        let pos = parse_location("-9.414112, -36.6328008").unwrap();
        assert!((pos.latitude - -9.414112).abs() < 1e-9);
        assert!((pos.longitude - -36.6328008).abs() < 1e-9);
    }

    #[test]
    fn test_parse_location_rejects_garbage() {
        assert!(parse_location("garbage").is_err());
        assert!(parse_location("1.0;2.0").is_err());
        assert!(parse_location("abc,def").is_err());
    }

    // the map screen requests a fix through spawn_blocking; a denial
    // must surface as PermissionDenied across the task boundary
    #[cfg(not(target_os = "android"))]
    #[tokio::test]
    async fn test_current_position_from_a_blocking_task() {
        let result = tokio::task::spawn_blocking(current_position).await.unwrap();
        assert!(matches!(result, Err(AppError::PermissionDenied(_))));
    }
}
