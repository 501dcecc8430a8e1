use super::types::TileXY;
use super::{BinaryReader, BinaryWriter};
use crate::error::Result;

pub const MAX_RIDES: usize = 255;
pub const RIDE_SIZE: usize = 0x260;
pub const MAX_STATIONS: usize = 4;
pub const MAX_TRAINS: usize = 12;
pub const NUM_CUSTOMER_SAMPLES: usize = 10;

pub const MAX_RIDE_MEASUREMENTS: usize = 8;
pub const MEASUREMENT_SAMPLES: usize = 4800;
pub const RIDE_MEASUREMENT_SIZE: usize = 12 + 4 * MEASUREMENT_SAMPLES;

/// Legacy operating modes that need translation
pub const MODE_NORMAL: u8 = 0;
pub const MODE_CONTINUOUS_CIRCUIT: u8 = 1;
pub const MODE_REVERSE_INCLINE_LAUNCHED_SHUTTLE: u8 = 2;
pub const MODE_POWERED_LAUNCH: u8 = 3;

/// Depart flag reused by two flat rides to mean "play music"
pub const DEPART_PLAY_MUSIC: u8 = 1 << 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LegacyVehicleColour {
    pub body: u8,
    pub trim: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegacyRide {
    pub ride_type: u8,
    pub vehicle_type: u8,
    pub lifecycle_flags: u16,
    pub operating_mode: u8,
    pub colour_scheme: u8,
    pub vehicle_colours: [LegacyVehicleColour; MAX_TRAINS],
    pub track_primary_colour: u8,
    pub track_secondary_colour: u8,
    pub track_support_colour: u8,
    pub status: u8,
    pub name: u16,
    pub name_argument: u16,
    pub overall_view: TileXY,
    pub station_starts: [TileXY; MAX_STATIONS],
    pub station_heights: [u8; MAX_STATIONS],
    pub station_lengths: [u8; MAX_STATIONS],
    pub station_depart: [u8; MAX_STATIONS],
    pub entrances: [TileXY; MAX_STATIONS],
    pub exits: [TileXY; MAX_STATIONS],
    pub last_peep_in_queue: [u16; MAX_STATIONS],
    pub num_peeps_in_queue: [u8; MAX_STATIONS],
    pub vehicles: [u16; MAX_TRAINS],
    pub depart_flags: u8,
    pub num_stations: u8,
    pub num_trains: u8,
    pub num_cars_per_train: u8,
    pub proposed_num_trains: u8,
    pub proposed_num_cars: u8,
    pub max_trains: u8,
    pub min_max_cars_per_train: u8,
    pub min_waiting_time: u8,
    pub max_waiting_time: u8,
    pub operation_option: u8,
    pub boat_hire_return_direction: u8,
    pub boat_hire_return_position: TileXY,
    pub special_track_elements: u8,
    pub max_speed: i32,
    pub average_speed: i32,
    pub max_positive_vertical_g: i32,
    pub max_negative_vertical_g: i32,
    pub max_lateral_g: i32,
    pub lengths: [i32; MAX_STATIONS],
    pub times: [u16; MAX_STATIONS],
    pub turn_count_default: u16,
    pub turn_count_banked: u16,
    pub turn_count_sloped: u16,
    pub inversions: u8,
    /// Low 6 bits drops, high 2 bits powered lifts
    pub drops: u8,
    pub start_drop_height: u8,
    pub highest_drop_height: u8,
    pub sheltered_length: i32,
    pub num_sheltered_sections: u8,
    pub num_customers: [u16; NUM_CUSTOMER_SAMPLES],
    pub price: u16,
    pub price_secondary: u16,
    pub excitement: i16,
    pub intensity: i16,
    pub nausea: i16,
    pub value: u16,
    pub satisfaction: u8,
    pub total_customers: u32,
    pub total_profit: i32,
    pub popularity: u8,
    pub num_riders: u16,
    pub build_date: i16,
    pub upkeep_cost: i16,
    pub reliability: u16,
    pub unreliability_factor: u8,
    pub downtime: u8,
    pub inspection_interval: u8,
    pub last_inspection: u8,
    pub breakdown_reason: u8,
    pub mechanic_status: u8,
    pub mechanic: u16,
    pub income_per_hour: i32,
    pub profit: i32,
    pub queue_time: [u8; MAX_STATIONS],
    pub track_colour_main: [u8; 4],
    pub track_colour_additional: [u8; 4],
    pub track_colour_supports: [u8; 4],
    pub music: u8,
    pub entrance_style: u8,
}

impl Default for LegacyRide {
    fn default() -> Self {
        Self {
            ride_type: rct1_tables::RIDE_TYPE_NULL,
            vehicle_type: 0,
            lifecycle_flags: 0,
            operating_mode: MODE_NORMAL,
            colour_scheme: 0,
            vehicle_colours: [LegacyVehicleColour::default(); MAX_TRAINS],
            track_primary_colour: 0,
            track_secondary_colour: 0,
            track_support_colour: 0,
            status: 0,
            name: 0,
            name_argument: 0,
            overall_view: TileXY::NULL,
            station_starts: [TileXY::NULL; MAX_STATIONS],
            station_heights: [0; MAX_STATIONS],
            station_lengths: [0; MAX_STATIONS],
            station_depart: [0; MAX_STATIONS],
            entrances: [TileXY::NULL; MAX_STATIONS],
            exits: [TileXY::NULL; MAX_STATIONS],
            last_peep_in_queue: [0xFFFF; MAX_STATIONS],
            num_peeps_in_queue: [0; MAX_STATIONS],
            vehicles: [0xFFFF; MAX_TRAINS],
            depart_flags: 0,
            num_stations: 0,
            num_trains: 0,
            num_cars_per_train: 0,
            proposed_num_trains: 0,
            proposed_num_cars: 0,
            max_trains: 0,
            min_max_cars_per_train: 0,
            min_waiting_time: 0,
            max_waiting_time: 0,
            operation_option: 0,
            boat_hire_return_direction: 0,
            boat_hire_return_position: TileXY::NULL,
            special_track_elements: 0,
            max_speed: 0,
            average_speed: 0,
            max_positive_vertical_g: 0,
            max_negative_vertical_g: 0,
            max_lateral_g: 0,
            lengths: [0; MAX_STATIONS],
            times: [0; MAX_STATIONS],
            turn_count_default: 0,
            turn_count_banked: 0,
            turn_count_sloped: 0,
            inversions: 0,
            drops: 0,
            start_drop_height: 0,
            highest_drop_height: 0,
            sheltered_length: 0,
            num_sheltered_sections: 0,
            num_customers: [0; NUM_CUSTOMER_SAMPLES],
            price: 0,
            price_secondary: 0,
            excitement: -1,
            intensity: -1,
            nausea: -1,
            value: 0xFFFF,
            satisfaction: 0,
            total_customers: 0,
            total_profit: 0,
            popularity: 0xFF,
            num_riders: 0,
            build_date: 0,
            upkeep_cost: 0,
            reliability: 0,
            unreliability_factor: 0,
            downtime: 0,
            inspection_interval: 0,
            last_inspection: 0,
            breakdown_reason: 0xFF,
            mechanic_status: 0,
            mechanic: 0xFFFF,
            income_per_hour: 0,
            profit: 0,
            queue_time: [0; MAX_STATIONS],
            track_colour_main: [0; 4],
            track_colour_additional: [0; 4],
            track_colour_supports: [0; 4],
            music: 0,
            entrance_style: 0,
        }
    }
}

fn read_xy(r: &mut BinaryReader) -> Result<TileXY> {
    Ok(TileXY { x: r.read_u8()?, y: r.read_u8()? })
}

fn read_xy_array<const N: usize>(r: &mut BinaryReader) -> Result<[TileXY; N]> {
    let mut out = [TileXY::NULL; N];
    for v in out.iter_mut() {
        *v = read_xy(r)?;
    }
    Ok(out)
}

fn write_xy(w: &mut BinaryWriter, xy: TileXY) {
    w.write_u8(xy.x);
    w.write_u8(xy.y);
}

impl LegacyRide {
    pub fn is_null(&self) -> bool {
        self.ride_type == rct1_tables::RIDE_TYPE_NULL
    }

    pub fn read(r: &mut BinaryReader) -> Result<Self> {
        let start = r.position();
        let mut ride = LegacyRide {
            ride_type: r.read_u8()?,
            vehicle_type: r.read_u8()?,
            lifecycle_flags: r.read_u16_le()?,
            operating_mode: r.read_u8()?,
            colour_scheme: r.read_u8()?,
            ..Default::default()
        };
        for c in ride.vehicle_colours.iter_mut() {
            c.body = r.read_u8()?;
            c.trim = r.read_u8()?;
        }
        ride.track_primary_colour = r.read_u8()?;
        ride.track_secondary_colour = r.read_u8()?;
        ride.track_support_colour = r.read_u8()?;
        ride.status = r.read_u8()?;
        ride.name = r.read_u16_le()?;
        ride.name_argument = r.read_u16_le()?;
        ride.overall_view = read_xy(r)?;
        ride.station_starts = read_xy_array(r)?;
        ride.station_heights = r.read_array()?;
        ride.station_lengths = r.read_array()?;
        r.skip(MAX_STATIONS)?;
        ride.station_depart = r.read_array()?;
        ride.entrances = read_xy_array(r)?;
        ride.exits = read_xy_array(r)?;
        ride.last_peep_in_queue = r.read_u16_array()?;
        ride.num_peeps_in_queue = r.read_array()?;
        ride.vehicles = r.read_u16_array()?;
        ride.depart_flags = r.read_u8()?;
        ride.num_stations = r.read_u8()?;
        ride.num_trains = r.read_u8()?;
        ride.num_cars_per_train = r.read_u8()?;
        ride.proposed_num_trains = r.read_u8()?;
        ride.proposed_num_cars = r.read_u8()?;
        ride.max_trains = r.read_u8()?;
        ride.min_max_cars_per_train = r.read_u8()?;
        ride.min_waiting_time = r.read_u8()?;
        ride.max_waiting_time = r.read_u8()?;
        ride.operation_option = r.read_u8()?;
        ride.boat_hire_return_direction = r.read_u8()?;
        ride.boat_hire_return_position = read_xy(r)?;
        r.skip(1)?;
        ride.special_track_elements = r.read_u8()?;
        ride.max_speed = r.read_i32_le()?;
        ride.average_speed = r.read_i32_le()?;
        ride.max_positive_vertical_g = r.read_i32_le()?;
        ride.max_negative_vertical_g = r.read_i32_le()?;
        ride.max_lateral_g = r.read_i32_le()?;
        ride.lengths = r.read_i32_array()?;
        ride.times = r.read_u16_array()?;
        ride.turn_count_default = r.read_u16_le()?;
        ride.turn_count_banked = r.read_u16_le()?;
        ride.turn_count_sloped = r.read_u16_le()?;
        ride.inversions = r.read_u8()?;
        ride.drops = r.read_u8()?;
        ride.start_drop_height = r.read_u8()?;
        ride.highest_drop_height = r.read_u8()?;
        ride.sheltered_length = r.read_i32_le()?;
        ride.num_sheltered_sections = r.read_u8()?;
        ride.num_customers = r.read_u16_array()?;
        ride.price = r.read_u16_le()?;
        ride.price_secondary = r.read_u16_le()?;
        ride.excitement = r.read_i16_le()?;
        ride.intensity = r.read_i16_le()?;
        ride.nausea = r.read_i16_le()?;
        ride.value = r.read_u16_le()?;
        ride.satisfaction = r.read_u8()?;
        ride.total_customers = r.read_u32_le()?;
        ride.total_profit = r.read_i32_le()?;
        ride.popularity = r.read_u8()?;
        ride.num_riders = r.read_u16_le()?;
        r.skip(1)?;
        ride.build_date = r.read_i16_le()?;
        ride.upkeep_cost = r.read_i16_le()?;
        ride.reliability = r.read_u16_le()?;
        ride.unreliability_factor = r.read_u8()?;
        ride.downtime = r.read_u8()?;
        ride.inspection_interval = r.read_u8()?;
        ride.last_inspection = r.read_u8()?;
        ride.breakdown_reason = r.read_u8()?;
        ride.mechanic_status = r.read_u8()?;
        ride.mechanic = r.read_u16_le()?;
        ride.income_per_hour = r.read_i32_le()?;
        ride.profit = r.read_i32_le()?;
        ride.queue_time = r.read_array()?;
        ride.track_colour_main = r.read_array()?;
        ride.track_colour_additional = r.read_array()?;
        ride.track_colour_supports = r.read_array()?;
        ride.music = r.read_u8()?;
        ride.entrance_style = r.read_u8()?;
        r.skip(RIDE_SIZE - (r.position() - start))?;
        Ok(ride)
    }

    pub fn write(&self, w: &mut BinaryWriter) {
        let start = w.len();
        w.write_u8(self.ride_type);
        w.write_u8(self.vehicle_type);
        w.write_u16_le(self.lifecycle_flags);
        w.write_u8(self.operating_mode);
        w.write_u8(self.colour_scheme);
        for c in &self.vehicle_colours {
            w.write_u8(c.body);
            w.write_u8(c.trim);
        }
        w.write_u8(self.track_primary_colour);
        w.write_u8(self.track_secondary_colour);
        w.write_u8(self.track_support_colour);
        w.write_u8(self.status);
        w.write_u16_le(self.name);
        w.write_u16_le(self.name_argument);
        write_xy(w, self.overall_view);
        self.station_starts.iter().for_each(|&xy| write_xy(w, xy));
        w.write_bytes(&self.station_heights);
        w.write_bytes(&self.station_lengths);
        w.write_zeros(MAX_STATIONS);
        w.write_bytes(&self.station_depart);
        self.entrances.iter().for_each(|&xy| write_xy(w, xy));
        self.exits.iter().for_each(|&xy| write_xy(w, xy));
        w.write_u16_slice(&self.last_peep_in_queue);
        w.write_bytes(&self.num_peeps_in_queue);
        w.write_u16_slice(&self.vehicles);
        w.write_u8(self.depart_flags);
        w.write_u8(self.num_stations);
        w.write_u8(self.num_trains);
        w.write_u8(self.num_cars_per_train);
        w.write_u8(self.proposed_num_trains);
        w.write_u8(self.proposed_num_cars);
        w.write_u8(self.max_trains);
        w.write_u8(self.min_max_cars_per_train);
        w.write_u8(self.min_waiting_time);
        w.write_u8(self.max_waiting_time);
        w.write_u8(self.operation_option);
        w.write_u8(self.boat_hire_return_direction);
        write_xy(w, self.boat_hire_return_position);
        w.write_u8(0);
        w.write_u8(self.special_track_elements);
        w.write_i32_le(self.max_speed);
        w.write_i32_le(self.average_speed);
        w.write_i32_le(self.max_positive_vertical_g);
        w.write_i32_le(self.max_negative_vertical_g);
        w.write_i32_le(self.max_lateral_g);
        w.write_i32_slice(&self.lengths);
        w.write_u16_slice(&self.times);
        w.write_u16_le(self.turn_count_default);
        w.write_u16_le(self.turn_count_banked);
        w.write_u16_le(self.turn_count_sloped);
        w.write_u8(self.inversions);
        w.write_u8(self.drops);
        w.write_u8(self.start_drop_height);
        w.write_u8(self.highest_drop_height);
        w.write_i32_le(self.sheltered_length);
        w.write_u8(self.num_sheltered_sections);
        w.write_u16_slice(&self.num_customers);
        w.write_u16_le(self.price);
        w.write_u16_le(self.price_secondary);
        w.write_i16_le(self.excitement);
        w.write_i16_le(self.intensity);
        w.write_i16_le(self.nausea);
        w.write_u16_le(self.value);
        w.write_u8(self.satisfaction);
        w.write_u32_le(self.total_customers);
        w.write_i32_le(self.total_profit);
        w.write_u8(self.popularity);
        w.write_u16_le(self.num_riders);
        w.write_u8(0);
        w.write_i16_le(self.build_date);
        w.write_i16_le(self.upkeep_cost);
        w.write_u16_le(self.reliability);
        w.write_u8(self.unreliability_factor);
        w.write_u8(self.downtime);
        w.write_u8(self.inspection_interval);
        w.write_u8(self.last_inspection);
        w.write_u8(self.breakdown_reason);
        w.write_u8(self.mechanic_status);
        w.write_u16_le(self.mechanic);
        w.write_i32_le(self.income_per_hour);
        w.write_i32_le(self.profit);
        w.write_bytes(&self.queue_time);
        w.write_bytes(&self.track_colour_main);
        w.write_bytes(&self.track_colour_additional);
        w.write_bytes(&self.track_colour_supports);
        w.write_u8(self.music);
        w.write_u8(self.entrance_style);
        w.pad_to(start, RIDE_SIZE);
    }
}

/// Live telemetry a ride records while it is being tested
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyRideMeasurement {
    pub ride_index: u8,
    pub flags: u8,
    pub last_use_tick: u32,
    pub num_items: u16,
    pub current_item: u16,
    pub vehicle_index: u8,
    pub current_station: u8,
    pub vertical: Vec<i8>,
    pub lateral: Vec<i8>,
    pub velocity: Vec<u8>,
    pub altitude: Vec<u8>,
}

impl Default for LegacyRideMeasurement {
    fn default() -> Self {
        Self {
            ride_index: 0xFF,
            flags: 0,
            last_use_tick: 0,
            num_items: 0,
            current_item: 0,
            vehicle_index: 0,
            current_station: 0,
            vertical: vec![0; MEASUREMENT_SAMPLES],
            lateral: vec![0; MEASUREMENT_SAMPLES],
            velocity: vec![0; MEASUREMENT_SAMPLES],
            altitude: vec![0; MEASUREMENT_SAMPLES],
        }
    }
}

impl LegacyRideMeasurement {
    pub fn is_null(&self) -> bool {
        self.ride_index == 0xFF
    }

    pub fn read(r: &mut BinaryReader) -> Result<Self> {
        Ok(Self {
            ride_index: r.read_u8()?,
            flags: r.read_u8()?,
            last_use_tick: r.read_u32_le()?,
            num_items: r.read_u16_le()?,
            current_item: r.read_u16_le()?,
            vehicle_index: r.read_u8()?,
            current_station: r.read_u8()?,
            vertical: r.read_bytes(MEASUREMENT_SAMPLES)?.iter().map(|&b| b as i8).collect(),
            lateral: r.read_bytes(MEASUREMENT_SAMPLES)?.iter().map(|&b| b as i8).collect(),
            velocity: r.read_bytes(MEASUREMENT_SAMPLES)?.to_vec(),
            altitude: r.read_bytes(MEASUREMENT_SAMPLES)?.to_vec(),
        })
    }

    pub fn write(&self, w: &mut BinaryWriter) {
        let start = w.len();
        w.write_u8(self.ride_index);
        w.write_u8(self.flags);
        w.write_u32_le(self.last_use_tick);
        w.write_u16_le(self.num_items);
        w.write_u16_le(self.current_item);
        w.write_u8(self.vehicle_index);
        w.write_u8(self.current_station);
        for samples in [&self.vertical, &self.lateral] {
            let n = samples.len().min(MEASUREMENT_SAMPLES);
            samples[..n].iter().for_each(|&v| w.write_i8(v));
            w.write_zeros(MEASUREMENT_SAMPLES - n);
        }
        for samples in [&self.velocity, &self.altitude] {
            let n = samples.len().min(MEASUREMENT_SAMPLES);
            w.write_bytes(&samples[..n]);
            w.write_zeros(MEASUREMENT_SAMPLES - n);
        }
        w.pad_to(start, RIDE_MEASUREMENT_SIZE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ride_record_size() {
        let mut w = BinaryWriter::new();
        LegacyRide::default().write(&mut w);
        assert_eq!(w.len(), RIDE_SIZE);
    }

    #[test]
    fn test_ride_fields_survive_write_read() {
        let mut ride = LegacyRide {
            ride_type: rct1_tables::rides::GHOST_TRAIN,
            vehicle_type: 35,
            drops: 0xC5,
            special_track_elements: 0x23,
            entrance_style: 2,
            ..Default::default()
        };
        ride.vehicle_colours[3] = LegacyVehicleColour { body: 4, trim: 9 };
        ride.entrances[1] = TileXY { x: 10, y: 20 };
        let mut w = BinaryWriter::new();
        ride.write(&mut w);
        let data = w.into_vec();
        let mut r = BinaryReader::new(&data);
        assert_eq!(LegacyRide::read(&mut r).unwrap(), ride);
        assert!(r.is_empty());
    }

    #[test]
    fn test_measurement_record_size() {
        let mut w = BinaryWriter::new();
        let m = LegacyRideMeasurement { ride_index: 3, velocity: vec![10; 4], ..Default::default() };
        m.write(&mut w);
        assert_eq!(w.len(), RIDE_MEASUREMENT_SIZE);
        let data = w.into_vec();
        let back = LegacyRideMeasurement::read(&mut BinaryReader::new(&data)).unwrap();
        assert_eq!(back.ride_index, 3);
        assert_eq!(back.velocity[..4], [10, 10, 10, 10]);
        assert_eq!(back.velocity[4], 0);
    }
}
