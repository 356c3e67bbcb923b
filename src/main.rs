mod app;
mod assets;
mod boot;
mod dom;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let mut env = dom::DomEnv::new(App);
    let instance = boot::bootstrap(&mut env, &assets::default_assets(), assets::MOUNT_ID)
        .expect("failed to bootstrap LoopyDB");

    log::info!("mounted under #{}", instance.mount_id());
}
