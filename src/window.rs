use {
    crate::{
        config::ReproConfig,
        error::{ReproError, ReproResult, ResultCode},
        pipeline::WindowHost,
    },
    windows::Win32::{
        Foundation::{HINSTANCE, HWND, LPARAM, LRESULT, WPARAM},
        System::LibraryLoader::GetModuleHandleW,
        UI::WindowsAndMessaging::{
            CreateWindowExW, DefWindowProcW, DestroyWindow, PostQuitMessage, RegisterClassExW,
            UnregisterClassW, WINDOW_EX_STYLE, WINDOW_STYLE, WM_CLOSE, WM_DESTROY, WNDCLASSEXW,
        },
    },
    windows_strings::{w, HSTRING, PCWSTR},
};

// No message loop runs, so these only matter if something else pumps messages.
unsafe extern "system" fn window_proc(
    window: HWND,
    message: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match message {
        WM_CLOSE => {
            let _ = unsafe { DestroyWindow(window) };
            LRESULT(0)
        }
        WM_DESTROY => {
            unsafe { PostQuitMessage(0) };
            LRESULT(0)
        }
        _ => unsafe { DefWindowProcW(window, message, wparam, lparam) },
    }
}

/// An invisible, zero-sized window that exists only to own a swap chain.
pub struct Win32WindowHost {
    class_name: HSTRING,
    instance: HINSTANCE,
    window: Option<HWND>,
}

impl Win32WindowHost {
    pub fn new(config: &ReproConfig) -> Self {
        Self {
            class_name: HSTRING::from(config.window_class.as_str()),
            instance: HINSTANCE::default(),
            window: None,
        }
    }

    fn window_error(error: windows_core::Error) -> ReproError {
        ReproError::WindowCreation {
            code: ResultCode::from(&error),
        }
    }
}

impl WindowHost for Win32WindowHost {
    type Surface = HWND;

    fn open(&mut self) -> ReproResult<HWND> {
        log::info!("Registering window class {}", self.class_name);
        self.instance = unsafe { GetModuleHandleW(None) }
            .map_err(Self::window_error)?
            .into();
        let class = WNDCLASSEXW {
            cbSize: size_of::<WNDCLASSEXW>() as u32,
            lpfnWndProc: Some(window_proc),
            hInstance: self.instance,
            lpszClassName: PCWSTR(self.class_name.as_ptr()),
            ..Default::default()
        };
        if unsafe { RegisterClassExW(&class) } == 0 {
            // Window creation below reports the failure that matters.
            log::debug!("RegisterClassExW returned no atom for {}", self.class_name);
        }

        let window = unsafe {
            CreateWindowExW(
                WINDOW_EX_STYLE(0),
                &self.class_name,
                w!(""),
                WINDOW_STYLE(0),
                0,
                0,
                0,
                0,
                None,
                None,
                Some(self.instance),
                None,
            )
        }
        .map_err(Self::window_error)?;
        log::info!("Created window {:?}", window);
        self.window = Some(window);
        Ok(window)
    }

    fn close(self) {
        if let Some(window) = self.window {
            if let Err(e) = unsafe { DestroyWindow(window) } {
                log::debug!("DestroyWindow failed: {e}");
            }
        }
        if let Err(e) = unsafe { UnregisterClassW(&self.class_name, Some(self.instance)) } {
            log::debug!("UnregisterClassW failed: {e}");
        }
        log::info!("Destroyed window and unregistered {}", self.class_name);
    }
}
