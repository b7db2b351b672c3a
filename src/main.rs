// Explicit prelude imports: the glob would pull in macroquad's own `rand`
// module and make the `rand` crate path ambiguous.
use macroquad::prelude::{error, get_frame_time, info, is_key_pressed, next_frame, Conf, KeyCode};
use rand::thread_rng;

use duck_hunter::compute::{fire, init_state, tick, WINDOW_HEIGHT, WINDOW_WIDTH};
use duck_hunter::display::{self, Assets};

fn window_conf() -> Conf {
    Conf {
        window_title: "Duck Hunter".to_owned(),
        window_width: WINDOW_WIDTH as i32,
        window_height: WINDOW_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Missing assets are the only startup failure; there is no retry.
    let assets = match Assets::load().await {
        Ok(assets) => assets,
        Err(e) => {
            error!("Failed to load assets: {:#}", e);
            std::process::exit(1);
        }
    };
    info!("Assets loaded");

    let mut rng = thread_rng();
    let mut state = init_state(WINDOW_WIDTH, WINDOW_HEIGHT);

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        if is_key_pressed(KeyCode::Space) {
            state = fire(&state);
        }

        let dt = get_frame_time();
        state = tick(&state, dt, &mut rng);

        display::render(&state, &assets);

        next_frame().await
    }
}
