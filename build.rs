fn main() {
    #[cfg(target_os = "windows")]
    {
        let res = winres::WindowsResource::new();
        if let Err(error) = res.compile() {
            println!("cargo:warning=Unable to embed Windows resources: {error}");
        }
    }
}
