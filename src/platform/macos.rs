//! macOS window access through the Accessibility (AX) API.
//!
//! CoreFoundation and ApplicationServices functions are linked directly;
//! the frontmost application comes from `NSWorkspace` with the legacy
//! system-wide `AXFocusedApplication` attribute as fallback.
//!
//! Every CF object obtained from a `Create`/`Copy` call is wrapped in
//! [`CfOwned`], which releases it on drop.

use super::{AppSource, FrontAppInfo, WindowSystem};
use crate::geometry::Rect;
use objc2::rc::{Retained, autoreleasepool};
use objc2_app_kit::{NSApplicationActivationOptions, NSRunningApplication, NSWorkspace};
use objc2_foundation::NSString;
use std::ffi::{CStr, c_char, c_void};
use ttyhop_config::TerminalApp;

// ============================================================================
// CoreFoundation / ApplicationServices declarations
// ============================================================================

type CFTypeRef = *const c_void;
type CFStringRef = *const c_void;
type CFArrayRef = *const c_void;
type CFDictionaryRef = *const c_void;
type AXUIElementRef = *const c_void;
type AXError = i32;

const K_AX_ERROR_SUCCESS: AXError = 0;
const K_AX_VALUE_CGPOINT_TYPE: u32 = 1;
const K_AX_VALUE_CGSIZE_TYPE: u32 = 2;
const K_CF_STRING_ENCODING_UTF8: u32 = 0x08000100;

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
struct CGPoint {
    x: f64,
    y: f64,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
struct CGSize {
    width: f64,
    height: f64,
}

#[repr(C)]
struct CFDictionaryKeyCallBacks {
    _opaque: [u8; 0],
}

#[repr(C)]
struct CFDictionaryValueCallBacks {
    _opaque: [u8; 0],
}

#[link(name = "CoreFoundation", kind = "framework")]
unsafe extern "C" {
    static kCFBooleanTrue: CFTypeRef;
    static kCFTypeDictionaryKeyCallBacks: CFDictionaryKeyCallBacks;
    static kCFTypeDictionaryValueCallBacks: CFDictionaryValueCallBacks;

    fn CFArrayGetCount(theArray: CFArrayRef) -> isize;
    fn CFArrayGetValueAtIndex(theArray: CFArrayRef, idx: isize) -> *const c_void;
    fn CFDictionaryCreate(
        allocator: *const c_void,
        keys: *const *const c_void,
        values: *const *const c_void,
        numValues: isize,
        keyCallBacks: *const CFDictionaryKeyCallBacks,
        valueCallBacks: *const CFDictionaryValueCallBacks,
    ) -> CFDictionaryRef;
    fn CFEqual(cf1: CFTypeRef, cf2: CFTypeRef) -> u8;
    fn CFRelease(cf: CFTypeRef);
    fn CFRetain(cf: CFTypeRef) -> CFTypeRef;
    fn CFStringCreateWithCString(
        alloc: *const c_void,
        cStr: *const c_char,
        encoding: u32,
    ) -> CFStringRef;
}

#[link(name = "ApplicationServices", kind = "framework")]
unsafe extern "C" {
    static kAXTrustedCheckOptionPrompt: CFStringRef;

    fn AXIsProcessTrustedWithOptions(options: CFDictionaryRef) -> u8;
    fn AXUIElementCreateApplication(pid: libc::pid_t) -> AXUIElementRef;
    fn AXUIElementCreateSystemWide() -> AXUIElementRef;
    fn AXUIElementCopyAttributeValue(
        element: AXUIElementRef,
        attribute: CFStringRef,
        value: *mut CFTypeRef,
    ) -> AXError;
    fn AXUIElementSetAttributeValue(
        element: AXUIElementRef,
        attribute: CFStringRef,
        value: CFTypeRef,
    ) -> AXError;
    fn AXUIElementPerformAction(element: AXUIElementRef, action: CFStringRef) -> AXError;
    fn AXUIElementGetPid(element: AXUIElementRef, pid: *mut libc::pid_t) -> AXError;
    fn AXValueGetValue(value: CFTypeRef, theType: u32, valuePtr: *mut c_void) -> u8;
}

// ============================================================================
// Owned CF references
// ============================================================================

/// A CoreFoundation object this process holds one retain on.
struct CfOwned(CFTypeRef);

impl CfOwned {
    /// Take ownership of a +1 reference from a `Create`/`Copy` call.
    fn from_create(ptr: CFTypeRef) -> Option<Self> {
        if ptr.is_null() { None } else { Some(Self(ptr)) }
    }

    /// Retain a borrowed reference (e.g. an array element).
    fn from_borrowed(ptr: CFTypeRef) -> Option<Self> {
        if ptr.is_null() {
            return None;
        }
        Some(Self(unsafe { CFRetain(ptr) }))
    }

    /// CFString for a constant attribute or action name.
    fn string(name: &CStr) -> Option<Self> {
        Self::from_create(unsafe {
            CFStringCreateWithCString(std::ptr::null(), name.as_ptr(), K_CF_STRING_ENCODING_UTF8)
        })
    }

    fn as_ptr(&self) -> CFTypeRef {
        self.0
    }
}

impl Drop for CfOwned {
    fn drop(&mut self) {
        unsafe { CFRelease(self.0) }
    }
}

impl PartialEq for CfOwned {
    fn eq(&self, other: &Self) -> bool {
        unsafe { CFEqual(self.0, other.0) != 0 }
    }
}

// ============================================================================
// AX helpers
// ============================================================================

fn ax_copy(element: &CfOwned, attribute: &CStr) -> Option<CfOwned> {
    let name = CfOwned::string(attribute)?;
    let mut value: CFTypeRef = std::ptr::null();
    let err = unsafe { AXUIElementCopyAttributeValue(element.as_ptr(), name.as_ptr(), &mut value) };
    if err != K_AX_ERROR_SUCCESS {
        return None;
    }
    CfOwned::from_create(value)
}

fn ax_set(element: &CfOwned, attribute: &CStr, value: CFTypeRef) {
    if let Some(name) = CfOwned::string(attribute) {
        let err = unsafe { AXUIElementSetAttributeValue(element.as_ptr(), name.as_ptr(), value) };
        if err != K_AX_ERROR_SUCCESS {
            log::debug!("AX set {:?} failed (err={err})", attribute);
        }
    }
}

fn ax_perform(element: &CfOwned, action: &CStr) {
    if let Some(name) = CfOwned::string(action) {
        let err = unsafe { AXUIElementPerformAction(element.as_ptr(), name.as_ptr()) };
        if err != K_AX_ERROR_SUCCESS {
            log::debug!("AX action {:?} failed (err={err})", action);
        }
    }
}

fn ax_pid(element: &CfOwned) -> Option<libc::pid_t> {
    let mut pid: libc::pid_t = 0;
    let err = unsafe { AXUIElementGetPid(element.as_ptr(), &mut pid) };
    (err == K_AX_ERROR_SUCCESS && pid > 0).then_some(pid)
}

fn ax_rect(element: &CfOwned) -> Option<Rect> {
    let position = ax_copy(element, c"AXPosition")?;
    let size = ax_copy(element, c"AXSize")?;

    let mut origin = CGPoint::default();
    let mut extent = CGSize::default();
    unsafe {
        if AXValueGetValue(
            position.as_ptr(),
            K_AX_VALUE_CGPOINT_TYPE,
            &mut origin as *mut CGPoint as *mut c_void,
        ) == 0
        {
            return None;
        }
        if AXValueGetValue(
            size.as_ptr(),
            K_AX_VALUE_CGSIZE_TYPE,
            &mut extent as *mut CGSize as *mut c_void,
        ) == 0
        {
            return None;
        }
    }

    Some(Rect::new(origin.x, origin.y, extent.width, extent.height))
}

// ============================================================================
// Running applications (AppKit)
// ============================================================================

fn ns_string(value: Option<Retained<NSString>>) -> String {
    value.map(|s| s.to_string()).unwrap_or_default()
}

fn identity_of(app: &NSRunningApplication) -> (String, String) {
    let bundle_id = ns_string(unsafe { app.bundleIdentifier() });
    let name = ns_string(unsafe { app.localizedName() });
    (bundle_id, name)
}

fn running_application(pid: libc::pid_t) -> Option<Retained<NSRunningApplication>> {
    unsafe { NSRunningApplication::runningApplicationWithProcessIdentifier(pid) }
}

/// Frontmost application according to `NSWorkspace`.
fn workspace_front_app() -> Option<(libc::pid_t, FrontAppInfo)> {
    autoreleasepool(|_| {
        let workspace = unsafe { NSWorkspace::sharedWorkspace() };
        let Some(app) = (unsafe { workspace.frontmostApplication() }) else {
            log::debug!("frontmostApplication: nil");
            return None;
        };
        let pid = unsafe { app.processIdentifier() };
        let (bundle_id, name) = identity_of(&app);
        log::debug!("frontmost (WS): bid={bundle_id} name={name} pid={pid}");
        Some((
            pid,
            FrontAppInfo {
                bundle_id,
                name,
                source: AppSource::Workspace,
            },
        ))
    })
}

/// Frontmost application according to the system-wide AX element.
fn accessibility_front_app() -> Option<(CfOwned, libc::pid_t, FrontAppInfo)> {
    let system = CfOwned::from_create(unsafe { AXUIElementCreateSystemWide() })?;
    let Some(app) = ax_copy(&system, c"AXFocusedApplication") else {
        log::debug!("AX focused app: none");
        return None;
    };
    let pid = ax_pid(&app)?;
    let (bundle_id, name) = autoreleasepool(|_| {
        running_application(pid)
            .map(|ra| identity_of(&ra))
            .unwrap_or_default()
    });
    log::debug!("frontmost (AX): bid={bundle_id} name={name} pid={pid}");
    Some((
        app,
        pid,
        FrontAppInfo {
            bundle_id,
            name,
            source: AppSource::Accessibility,
        },
    ))
}

// ============================================================================
// WindowSystem implementation
// ============================================================================

/// An application's AX element together with its identity.
pub struct MacApp {
    element: CfOwned,
    pid: libc::pid_t,
    info: FrontAppInfo,
}

/// One AX window element. Equality is `CFEqual` identity.
#[derive(PartialEq)]
pub struct MacWindow(CfOwned);

/// [`WindowSystem`] backed by the macOS Accessibility API.
pub struct MacWindowSystem {
    terminal: TerminalApp,
}

impl MacWindowSystem {
    pub fn new(terminal: TerminalApp) -> Self {
        Self { terminal }
    }
}

impl WindowSystem for MacWindowSystem {
    type App = MacApp;
    type Window = MacWindow;

    fn is_trusted(&self) -> bool {
        let trusted = unsafe {
            let keys: [*const c_void; 1] = [kAXTrustedCheckOptionPrompt];
            let values: [*const c_void; 1] = [kCFBooleanTrue];
            let options = CfOwned::from_create(CFDictionaryCreate(
                std::ptr::null(),
                keys.as_ptr(),
                values.as_ptr(),
                1,
                &raw const kCFTypeDictionaryKeyCallBacks,
                &raw const kCFTypeDictionaryValueCallBacks,
            ));
            let options_ptr = options.as_ref().map_or(std::ptr::null(), CfOwned::as_ptr);
            AXIsProcessTrustedWithOptions(options_ptr) != 0
        };
        log::debug!("accessibility trusted={trusted}");
        trusted
    }

    fn front_app(&self) -> Option<MacApp> {
        if let Some((pid, info)) = workspace_front_app() {
            match CfOwned::from_create(unsafe { AXUIElementCreateApplication(pid) }) {
                Some(element) => return Some(MacApp { element, pid, info }),
                None => log::debug!("AXUIElementCreateApplication({pid}) returned null"),
            }
        }
        accessibility_front_app().map(|(element, pid, info)| MacApp { element, pid, info })
    }

    fn front_app_info(&self) -> Option<FrontAppInfo> {
        workspace_front_app()
            .map(|(_, info)| info)
            .filter(|info| !info.bundle_id.is_empty() || !info.name.is_empty())
            .or_else(|| accessibility_front_app().map(|(_, _, info)| info))
    }

    fn is_target_app(&self, app: &MacApp) -> bool {
        let ok = self.terminal.matches(&app.info.bundle_id, &app.info.name);
        log::debug!(
            "is_target_app={ok} (bid={} name={})",
            app.info.bundle_id,
            app.info.name
        );
        ok
    }

    fn focused_window(&self, app: &MacApp) -> Option<MacWindow> {
        if let Some(window) = ax_copy(&app.element, c"AXFocusedWindow") {
            return Some(MacWindow(window));
        }
        self.all_windows(app)?.into_iter().next()
    }

    fn all_windows(&self, app: &MacApp) -> Option<Vec<MacWindow>> {
        let array = ax_copy(&app.element, c"AXWindows")?;
        let count = unsafe { CFArrayGetCount(array.as_ptr()) };
        let windows = (0..count)
            .filter_map(|i| {
                CfOwned::from_borrowed(unsafe { CFArrayGetValueAtIndex(array.as_ptr(), i) })
            })
            .map(MacWindow)
            .collect();
        Some(windows)
    }

    fn rect(&self, window: &MacWindow) -> Option<Rect> {
        ax_rect(&window.0)
    }

    // activateWithOptions is deprecated since macOS 14
    #[allow(deprecated)]
    fn focus(&self, app: &MacApp, window: &MacWindow) {
        ax_perform(&window.0, c"AXRaise");
        let yes = unsafe { kCFBooleanTrue };
        ax_set(&window.0, c"AXMain", yes);
        ax_set(&window.0, c"AXFocused", yes);
        ax_set(&app.element, c"AXFocusedWindow", window.0.as_ptr());

        let pid = ax_pid(&window.0).unwrap_or(app.pid);
        autoreleasepool(|_| {
            if let Some(ra) = running_application(pid) {
                unsafe { ra.activateWithOptions(NSApplicationActivationOptions(0)) };
            }
        });
    }
}
